//! Application views.
//!
//! The main window owns the router and renders whichever page is mounted
//! at the current path.

mod form_state;
mod main_window;

pub use form_state::FormState;
pub use main_window::MainWindow;
