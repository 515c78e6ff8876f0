#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use kursy_web::app::*;
    use kursy_web::core::config::Config;
    use kursy_web::core::proxy::{ProxyState, api_proxy_router};
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Config loaded: backend={}, proxy_timeout={:?}",
        config.backend_url.as_deref().unwrap_or("<not set>"),
        config.proxy_timeout
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None).unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Serve pre-compressed static assets (.br / .gz) from /pkg
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let mut app = Router::new();

    // Forward /api/* to the backend so cookies stay on this origin
    match &config.backend_url {
        Some(backend_url) => {
            let proxy = match ProxyState::new(backend_url.clone(), config.proxy_timeout) {
                Ok(proxy) => proxy,
                Err(e) => {
                    tracing::error!("Failed to build API proxy client: {}", e);
                    std::process::exit(1);
                }
            };
            app = app.merge(api_proxy_router(proxy));
            tracing::info!("API proxy: http://{}/api/* -> {}/api/*", addr, backend_url);
        }
        None => tracing::warn!("BACKEND_URL not set, /api/* is not served"),
    }

    let app = app.merge(leptos_router).layer(
        CompressionLayer::new()
            .br(true)
            .gzip(true)
            .quality(CompressionLevel::Best),
    );

    tracing::info!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
