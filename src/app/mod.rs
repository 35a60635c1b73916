//! Application lifecycle.
//!
//! This module contains:
//! - Action definitions (inline via gpui::actions!)
//! - Keybinding registration
//! - Window creation

use anyhow::Result;
use gpui::{
    actions, px, size, AppContext, Application, Bounds, KeyBinding, WindowBounds, WindowOptions,
};
use tracing::error;

use crate::config::AppConfig;
use crate::routes::Router;
use crate::ui::{MainWindow, Theme};

// Define application actions
actions!(cartana, [Quit, GoBack, GoForward]);

/// Main application entry point
pub struct App;

impl App {
    /// Run the application with the window opened at `initial_path`.
    pub fn run(config: AppConfig, initial_path: String) -> Result<()> {
        Application::new().run(move |cx: &mut gpui::App| {
            Self::register_keybindings(cx);
            cx.on_action(|_: &Quit, cx| cx.quit());

            let theme = Theme::for_mode(config.theme);
            let router = Router::new(initial_path);
            let bounds = Bounds::centered(
                None,
                size(px(config.window_width), px(config.window_height)),
                cx,
            );
            let options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            };

            let opened = cx.open_window(options, |window, cx| {
                cx.new(|cx| MainWindow::new(router, theme, window, cx))
            });
            match opened {
                Ok(_) => cx.activate(true),
                Err(err) => {
                    error!(error = %err, "failed to open window");
                    cx.quit();
                }
            }
        });

        Ok(())
    }

    /// Register global keybindings
    fn register_keybindings(cx: &mut gpui::App) {
        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("cmd-[", GoBack, None),
            KeyBinding::new("cmd-]", GoForward, None),
            KeyBinding::new("alt-left", GoBack, None),
            KeyBinding::new("alt-right", GoForward, None),
        ]);
    }
}
