//! Sign-in and sign-up form.
//!
//! Both modes share one layout: illustration on the left, form on the
//! right. Nothing here submits; the Google and submit buttons are inert.

use gpui::{div, prelude::*, px, Div, FontWeight, IntoElement, ParentElement, RenderOnce, Styled};

use crate::pages::{AuthMode, ButtonStyle, Section};
use crate::ui::components::{Bind, Button, ImageSlot, TextField};
use crate::ui::theme::ThemeColors;

#[derive(IntoElement)]
pub struct AuthFormSection {
    mode: AuthMode,
    colors: ThemeColors,
    fields: Vec<TextField>,
    switch_link: Option<Button>,
    google: Option<Button>,
    submit: Option<Button>,
}

impl AuthFormSection {
    pub fn new(mode: AuthMode, colors: ThemeColors, fields: Vec<TextField>, bind: Bind) -> Self {
        let section = Section::AuthForm(mode);
        let button = |style: ButtonStyle| {
            section
                .buttons()
                .iter()
                .find(|spec| spec.style == style)
                .map(|spec| Button::for_spec(spec, colors, bind))
        };

        Self {
            mode,
            colors,
            fields,
            switch_link: button(ButtonStyle::Link),
            google: button(ButtonStyle::Google),
            submit: button(ButtonStyle::Submit),
        }
    }

    fn render_top_text(&mut self) -> Div {
        let colors = self.colors;
        let row = div()
            .flex()
            .items_center()
            .gap(px(4.0))
            .text_sm()
            .text_color(colors.text_muted);

        match self.mode {
            AuthMode::SignIn => row.child("Don't have an account?").child(
                div()
                    .font_weight(FontWeight::BOLD)
                    .children(self.switch_link.take()),
            ),
            AuthMode::SignUp => row.child("Find your way with").child(
                div()
                    .font_weight(FontWeight::BOLD)
                    .text_color(colors.accent)
                    .child("Cartana"),
            ),
        }
    }
}

impl RenderOnce for AuthFormSection {
    fn render(mut self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let colors = self.colors;
        let section = Section::AuthForm(self.mode);
        let top_text = self.render_top_text();

        div()
            .w_full()
            .py(px(48.0))
            .flex()
            .justify_center()
            .child(
                div()
                    .w(px(960.0))
                    .flex()
                    .rounded(px(16.0))
                    .border_1()
                    .border_color(colors.border)
                    .overflow_hidden()
                    .children(
                        section
                            .images()
                            .iter()
                            .map(|image| ImageSlot::new(image.alt, colors).size(440.0, 560.0)),
                    )
                    .child(
                        div()
                            .flex_1()
                            .p(px(40.0))
                            .flex()
                            .flex_col()
                            .gap(px(16.0))
                            .child(top_text)
                            .child(
                                div()
                                    .text_3xl()
                                    .font_weight(FontWeight::BOLD)
                                    .text_color(colors.text_primary)
                                    .child(section.heading()),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(colors.text_muted)
                                    .child("Sign in with your social account"),
                            )
                            .children(self.google)
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(colors.text_muted)
                                    .child("Or continue with email"),
                            )
                            .children(self.fields)
                            .children(self.submit)
                            .when(self.mode == AuthMode::SignIn, |d| {
                                d.child(
                                    div()
                                        .text_sm()
                                        .text_color(colors.text_muted)
                                        .child("Forgot password?"),
                                )
                            }),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::ButtonSpec;
    use crate::ui::components::ClickHandler;
    use gpui::{App, ClickEvent, Window};

    fn noop(_: ButtonSpec) -> ClickHandler {
        Box::new(|_: &ClickEvent, _: &mut Window, _: &mut App| {})
    }

    #[test]
    fn sign_in_has_link_back_to_sign_up() {
        let form = AuthFormSection::new(AuthMode::SignIn, ThemeColors::light(), Vec::new(), &noop);
        assert!(form.switch_link.is_some());
        assert!(form.google.is_some());
        assert!(form.submit.is_some());
    }

    #[test]
    fn sign_up_has_no_switch_link() {
        let form = AuthFormSection::new(AuthMode::SignUp, ThemeColors::light(), Vec::new(), &noop);
        assert!(form.switch_link.is_none());
        assert!(form.submit.is_some());
    }
}
