//! UI components and views
//!
//! This module contains the gpui-based user interface for Cartana.
//! The UI is organized into:
//! - `theme`: Color schemes and styling
//! - `components`: Reusable UI primitives
//! - `sections`: Static blocks pages are assembled from
//! - `views`: The main window and its per-page state

pub mod components;
pub mod sections;
pub mod theme;
pub mod views;

pub use theme::{Theme, ThemeColors, ThemeMode};
pub use views::MainWindow;
