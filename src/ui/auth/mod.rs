//! Authentication UI module
//!
//! This module provides the login form for the frontend.

mod login_form;

pub use login_form::{LoginForm, SharedCredentials};
