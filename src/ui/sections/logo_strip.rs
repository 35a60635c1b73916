//! Partner logo strip.

use gpui::{div, px, FontWeight, IntoElement, ParentElement, RenderOnce, Styled};

use crate::pages::Section;
use crate::ui::components::ImageSlot;
use crate::ui::theme::ThemeColors;

#[derive(IntoElement)]
pub struct LogoStripSection {
    colors: ThemeColors,
}

impl LogoStripSection {
    pub fn new(colors: ThemeColors) -> Self {
        Self { colors }
    }
}

impl RenderOnce for LogoStripSection {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let colors = self.colors;

        div()
            .w_full()
            .py(px(48.0))
            .flex()
            .flex_col()
            .items_center()
            .gap(px(24.0))
            .bg(colors.surface)
            .child(
                div()
                    .text_2xl()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(colors.text_primary)
                    .child(Section::LogoStrip.heading()),
            )
            .child(
                div().flex().items_center().gap(px(48.0)).children(
                    Section::LogoStrip
                        .images()
                        .iter()
                        .map(|logo| ImageSlot::new(logo.alt, colors)),
                ),
            )
    }
}
