//! Navigation bar.

use gpui::{div, px, FontWeight, IntoElement, ParentElement, RenderOnce, Styled};

use crate::pages::{ButtonSpec, NavBar};
use crate::ui::components::{Bind, Button};
use crate::ui::theme::ThemeColors;

#[derive(IntoElement)]
pub struct NavBarSection {
    colors: ThemeColors,
    brand: Button,
    left: Vec<Button>,
    right: Vec<Button>,
    sign_up: Button,
}

impl NavBarSection {
    pub fn new(colors: ThemeColors, bind: Bind) -> Self {
        let buttons = |specs: &[ButtonSpec]| -> Vec<Button> {
            specs
                .iter()
                .map(|spec| Button::for_spec(spec, colors, bind))
                .collect()
        };
        Self {
            colors,
            brand: Button::for_spec(NavBar::brand(), colors, bind),
            left: buttons(NavBar::left_links()),
            right: buttons(NavBar::right_links()),
            sign_up: Button::for_spec(NavBar::sign_up(), colors, bind),
        }
    }
}

impl RenderOnce for NavBarSection {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let colors = self.colors;

        div()
            .h(px(72.0))
            .w_full()
            .px(px(48.0))
            .flex()
            .items_center()
            .justify_between()
            .border_b_1()
            .border_color(colors.border)
            .bg(colors.background)
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::BOLD)
                    .text_color(colors.accent)
                    .child(self.brand),
            )
            .child(div().flex().items_center().gap(px(32.0)).children(self.left))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(24.0))
                    .children(self.right)
                    .child(self.sign_up),
            )
    }
}
