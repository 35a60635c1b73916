//! Image slots.
//!
//! Artwork is not bundled; each slot draws a framed box captioned with the
//! image's alt text at the size the artwork would occupy.

use gpui::{div, px, IntoElement, ParentElement, RenderOnce, SharedString, Styled};

use crate::ui::theme::ThemeColors;

#[derive(IntoElement)]
pub struct ImageSlot {
    alt: SharedString,
    width: f32,
    height: f32,
    colors: ThemeColors,
}

impl ImageSlot {
    pub fn new(alt: impl Into<SharedString>, colors: ThemeColors) -> Self {
        Self {
            alt: alt.into(),
            width: 160.0,
            height: 48.0,
            colors,
        }
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl RenderOnce for ImageSlot {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        div()
            .w(px(self.width))
            .h(px(self.height))
            .flex()
            .items_center()
            .justify_center()
            .rounded(px(8.0))
            .border_1()
            .border_color(self.colors.border)
            .bg(self.colors.surface)
            .text_xs()
            .text_color(self.colors.text_muted)
            .child(self.alt)
    }
}
