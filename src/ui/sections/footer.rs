//! Page footer.

use gpui::{div, px, FontWeight, IntoElement, ParentElement, RenderOnce, Styled};

use crate::pages::Section;
use crate::ui::theme::ThemeColors;

const COPYRIGHT: &str = "\u{a9} Cartana. All rights reserved.";

#[derive(IntoElement)]
pub struct FooterSection {
    colors: ThemeColors,
}

impl FooterSection {
    pub fn new(colors: ThemeColors) -> Self {
        Self { colors }
    }
}

impl RenderOnce for FooterSection {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let colors = self.colors;

        div()
            .w_full()
            .px(px(48.0))
            .py(px(24.0))
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(colors.border)
            .child(
                div()
                    .font_weight(FontWeight::BOLD)
                    .text_color(colors.accent)
                    .child(Section::Footer.heading()),
            )
            .child(div().text_sm().text_color(colors.text_muted).child(COPYRIGHT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_carries_brand_and_copyright() {
        assert_eq!(Section::Footer.heading(), "Cartana");
        assert!(COPYRIGHT.contains("Cartana"));
        assert_eq!(FooterSection::new(ThemeColors::dark()).colors, ThemeColors::dark());
    }
}
