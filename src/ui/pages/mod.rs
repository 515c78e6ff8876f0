//! Application pages module
//!
//! - Home page
//! - Login page
//! - Course creation page
//! - Not found page

mod create_course;
mod home;
mod layout;
mod login;
mod not_found;

pub use create_course::CreateCoursePage;
pub use home::HomePage;
pub use layout::PageLayout;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
