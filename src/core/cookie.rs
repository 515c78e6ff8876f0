//! Cookie parsing and the credential capability used for CSRF tokens
//!
//! Components never read `document.cookie` themselves. They receive a
//! [`CredentialProvider`] and ask it for a token by cookie name at submit time.

use std::sync::Arc;

use percent_encoding::percent_decode_str;

use super::error::SubmitError;

/// Name of the cookie carrying the CSRF token issued by the backend
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Header the backend expects the CSRF token in
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// Source of credential values such as the CSRF token
pub trait CredentialProvider {
    /// Look up a token by cookie name. `Ok(None)` when absent, an error when
    /// the stored value cannot be decoded.
    fn token(&self, name: &str) -> Result<Option<String>, SubmitError>;
}

/// Find a cookie by name in a `document.cookie` style string.
///
/// Entries are split on `;` and trimmed; the first entry starting with
/// `name=` wins and its value is percent-decoded. `+` is kept as is. A stray
/// `%` or an escape that is not UTF-8 fails the lookup instead of being
/// patched over.
pub fn find_cookie(cookies: &str, name: &str) -> Result<Option<String>, SubmitError> {
    if cookies.is_empty() {
        return Ok(None);
    }

    let prefix = format!("{}=", name);
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|entry| entry.strip_prefix(prefix.as_str()))
        .map(|raw| decode_cookie_value(name, raw))
        .transpose()
}

fn decode_cookie_value(name: &str, raw: &str) -> Result<String, SubmitError> {
    let malformed = || SubmitError::Decode(format!("Malformed {} cookie", name));

    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3).ok_or_else(malformed)?;
            if !escape.iter().all(u8::is_ascii_hexdigit) {
                return Err(malformed());
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(raw)
        .decode_utf8()
        .map(|value| value.into_owned())
        .map_err(|_| malformed())
}

/// A fixed cookie string.
///
/// Used on the server, where there is no document, and in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CookieJar {
    raw: String,
}

impl CookieJar {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl CredentialProvider for CookieJar {
    fn token(&self, name: &str) -> Result<Option<String>, SubmitError> {
        find_cookie(&self.raw, name)
    }
}

impl<T: CredentialProvider + ?Sized> CredentialProvider for &T {
    fn token(&self, name: &str) -> Result<Option<String>, SubmitError> {
        (**self).token(name)
    }
}

impl<T: CredentialProvider + ?Sized> CredentialProvider for Arc<T> {
    fn token(&self, name: &str) -> Result<Option<String>, SubmitError> {
        (**self).token(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_cookie_single() {
        assert_eq!(
            find_cookie("csrftoken=abc123", "csrftoken"),
            Ok(Some("abc123".to_string()))
        );
    }

    #[test]
    fn test_find_cookie_among_others() {
        let cookies = "sessionid=s1; csrftoken=tok; theme=dark";
        assert_eq!(find_cookie(cookies, "csrftoken"), Ok(Some("tok".to_string())));
        assert_eq!(find_cookie(cookies, "theme"), Ok(Some("dark".to_string())));
    }

    #[test]
    fn test_find_cookie_first_match_wins() {
        assert_eq!(
            find_cookie("csrftoken=first; csrftoken=second", "csrftoken"),
            Ok(Some("first".to_string()))
        );
    }

    #[test]
    fn test_find_cookie_requires_exact_name() {
        // "xcsrftoken" must not match "csrftoken", and a bare prefix must not either
        assert_eq!(find_cookie("xcsrftoken=nope; csrftokenx=no", "csrftoken"), Ok(None));
    }

    #[test]
    fn test_find_cookie_absent_or_empty() {
        assert_eq!(find_cookie("", "csrftoken"), Ok(None));
        assert_eq!(find_cookie("sessionid=s1", "csrftoken"), Ok(None));
    }

    #[test]
    fn test_find_cookie_percent_decodes() {
        assert_eq!(
            find_cookie("csrftoken=a%20b%3Dc", "csrftoken"),
            Ok(Some("a b=c".to_string()))
        );
        // decodeURIComponent leaves '+' alone
        assert_eq!(find_cookie("csrftoken=a+b", "csrftoken"), Ok(Some("a+b".to_string())));
    }

    #[test]
    fn test_find_cookie_empty_value() {
        assert_eq!(find_cookie("csrftoken=", "csrftoken"), Ok(Some(String::new())));
    }

    #[test]
    fn test_cookie_jar_provider() {
        let jar = CookieJar::new("csrftoken=xyz");
        assert_eq!(jar.token(CSRF_COOKIE_NAME), Ok(Some("xyz".to_string())));
        assert_eq!(CookieJar::empty().token(CSRF_COOKIE_NAME), Ok(None));
    }

    #[test]
    fn test_shared_provider() {
        let shared: Arc<dyn CredentialProvider + Send + Sync> =
            Arc::new(CookieJar::new("csrftoken=shared"));
        assert_eq!(shared.token(CSRF_COOKIE_NAME), Ok(Some("shared".to_string())));
    }

    #[test]
    fn test_find_cookie_rejects_malformed_escape() {
        for cookies in ["csrftoken=abc%", "csrftoken=abc%2", "csrftoken=%zz1", "csrftoken=%E0%A4%A"] {
            assert_eq!(
                find_cookie(cookies, "csrftoken"),
                Err(SubmitError::Decode("Malformed csrftoken cookie".into())),
                "cookies: {}",
                cookies
            );
        }
    }

    #[test]
    fn test_find_cookie_rejects_invalid_utf8() {
        assert!(matches!(
            find_cookie("csrftoken=%FF%FE", "csrftoken"),
            Err(SubmitError::Decode(_))
        ));
    }

    #[test]
    fn test_malformed_cookie_elsewhere_is_ignored() {
        assert_eq!(
            find_cookie("theme=%zz; csrftoken=ok", "csrftoken"),
            Ok(Some("ok".to_string()))
        );
    }
}
