//! Result page body. There are no results to show yet.

use gpui::{div, px, FontWeight, IntoElement, ParentElement, RenderOnce, Styled};

use crate::pages::Section;
use crate::ui::theme::ThemeColors;

#[derive(IntoElement)]
pub struct ResultSection {
    colors: ThemeColors,
}

impl ResultSection {
    pub fn new(colors: ThemeColors) -> Self {
        Self { colors }
    }
}

impl RenderOnce for ResultSection {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        div()
            .w_full()
            .py(px(64.0))
            .flex()
            .justify_center()
            .text_2xl()
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(self.colors.text_primary)
            .child(Section::ResultPlaceholder.heading())
    }
}
