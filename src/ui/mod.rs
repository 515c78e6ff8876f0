pub mod auth;
pub mod browser;
pub mod common;
pub mod courses;
pub mod form_signals;
pub mod icon;
pub mod pages;

pub use icon::{Icon, icons};
