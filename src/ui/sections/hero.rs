//! Landing hero.

use gpui::{div, px, FontWeight, IntoElement, ParentElement, RenderOnce, Styled};

use crate::pages::Section;
use crate::ui::components::{Bind, Button, ImageSlot};
use crate::ui::theme::ThemeColors;

const TAGLINE: &str = "Tired of doom-scrolling through e-commerce sites to find a product \
                       that fits your budget? Cartana has your back.";

#[derive(IntoElement)]
pub struct HeroSection {
    colors: ThemeColors,
    calls_to_action: Vec<Button>,
}

impl HeroSection {
    pub fn new(colors: ThemeColors, bind: Bind) -> Self {
        Self {
            colors,
            calls_to_action: Section::Hero
                .buttons()
                .iter()
                .map(|spec| Button::for_spec(spec, colors, bind))
                .collect(),
        }
    }
}

impl RenderOnce for HeroSection {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let colors = self.colors;
        // Heading copy ends with the brand word, which is set in the accent color.
        let heading = Section::Hero.heading();
        let lead = heading.strip_suffix("Cartana").unwrap_or(heading);

        div()
            .w_full()
            .px(px(48.0))
            .py(px(64.0))
            .flex()
            .items_center()
            .justify_between()
            .gap(px(48.0))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap(px(24.0))
                    .child(
                        div()
                            .flex()
                            .gap(px(10.0))
                            .text_3xl()
                            .font_weight(FontWeight::BOLD)
                            .text_color(colors.text_primary)
                            .child(lead)
                            .child(div().text_color(colors.accent).child("Cartana")),
                    )
                    .child(div().text_lg().text_color(colors.text_muted).child(TAGLINE))
                    .child(
                        div()
                            .flex()
                            .gap(px(16.0))
                            .children(self.calls_to_action),
                    ),
            )
            .children(
                Section::Hero
                    .images()
                    .iter()
                    .map(|image| ImageSlot::new(image.alt, colors).size(420.0, 320.0)),
            )
    }
}
