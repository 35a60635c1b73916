//! Cartana desktop front end.
//!
//! Landing, search and account pages for the Cartana product search, wired
//! together with in-app routing. Search and sign-in are placeholders: their
//! controls render but have no behavior attached.

pub mod app;
pub mod config;
pub mod pages;
pub mod routes;
pub mod ui;

pub use app::App;
pub use config::{AppConfig, ConfigError};
pub use routes::{Navigator, Route, Router};
