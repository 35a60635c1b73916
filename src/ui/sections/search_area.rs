//! Search entry area.

use gpui::{div, px, FontWeight, IntoElement, ParentElement, RenderOnce, Styled};

use crate::pages::Section;
use crate::ui::components::{Bind, Button, TextField};
use crate::ui::theme::ThemeColors;

#[derive(IntoElement)]
pub struct SearchAreaSection {
    colors: ThemeColors,
    fields: Vec<TextField>,
    buttons: Vec<Button>,
}

impl SearchAreaSection {
    pub fn new(colors: ThemeColors, fields: Vec<TextField>, bind: Bind) -> Self {
        Self {
            colors,
            fields,
            buttons: Section::SearchArea
                .buttons()
                .iter()
                .map(|spec| Button::for_spec(spec, colors, bind))
                .collect(),
        }
    }
}

impl RenderOnce for SearchAreaSection {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let colors = self.colors;

        div()
            .w_full()
            .py(px(96.0))
            .flex()
            .flex_col()
            .items_center()
            .gap(px(32.0))
            .child(
                div()
                    .text_3xl()
                    .font_weight(FontWeight::BOLD)
                    .text_color(colors.text_primary)
                    .child(Section::SearchArea.heading()),
            )
            .child(div().w(px(560.0)).children(self.fields))
            .children(self.buttons)
    }
}
