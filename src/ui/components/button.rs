//! Button component.

use gpui::{
    div, prelude::*, px, ElementId, FontWeight, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled,
};

use super::{Bind, ClickHandler};
use crate::pages::{ButtonSpec, ButtonStyle};
use crate::ui::theme::ThemeColors;

/// A clickable control, rendered according to its [`ButtonStyle`].
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    style: ButtonStyle,
    colors: ThemeColors,
    full_width: bool,
    on_click: Option<ClickHandler>,
}

impl Button {
    pub fn new(
        id: impl Into<ElementId>,
        label: impl Into<SharedString>,
        colors: ThemeColors,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            style: ButtonStyle::Primary,
            colors,
            full_width: false,
            on_click: None,
        }
    }

    /// Button for `spec`, wired through `bind`.
    pub fn for_spec(spec: &ButtonSpec, colors: ThemeColors, bind: Bind) -> Self {
        Self::new(spec.id, spec.label, colors)
            .style(spec.style)
            .full_width(spec.style == ButtonStyle::Submit)
            .on_click(bind(*spec))
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn on_click(mut self, handler: ClickHandler) -> Self {
        self.on_click = Some(handler);
        self
    }

    fn padding(&self) -> (f32, f32) {
        match self.style {
            ButtonStyle::Link => (0.0, 0.0),
            ButtonStyle::NavSignUp => (20.0, 8.0),
            ButtonStyle::Search => (32.0, 12.0),
            _ => (24.0, 12.0),
        }
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let colors = self.colors;
        let (pad_x, pad_y) = self.padding();

        let base = div()
            .id(self.id)
            .px(px(pad_x))
            .py(px(pad_y))
            .flex()
            .items_center()
            .justify_center()
            .gap(px(8.0))
            .cursor_pointer()
            .when(self.full_width, |d| d.w_full());

        let styled = match self.style {
            ButtonStyle::Primary | ButtonStyle::Submit | ButtonStyle::Search => base
                .rounded(px(8.0))
                .bg(colors.accent)
                .text_color(colors.accent_text)
                .font_weight(FontWeight::SEMIBOLD)
                .hover(move |s| s.bg(colors.accent_hover)),
            ButtonStyle::NavSignUp => base
                .rounded(px(999.0))
                .bg(colors.accent)
                .text_color(colors.accent_text)
                .text_sm()
                .font_weight(FontWeight::SEMIBOLD)
                .hover(move |s| s.bg(colors.accent_hover)),
            ButtonStyle::Secondary => base
                .rounded(px(8.0))
                .border_1()
                .border_color(colors.accent)
                .text_color(colors.accent)
                .hover(move |s| s.bg(colors.surface)),
            ButtonStyle::Google => base
                .w_full()
                .rounded(px(8.0))
                .border_1()
                .border_color(colors.border)
                .bg(colors.background)
                .text_color(colors.text_primary)
                .hover(move |s| s.bg(colors.surface_elevated))
                .child(
                    div()
                        .font_weight(FontWeight::BOLD)
                        .text_color(colors.accent)
                        .child("G"),
                ),
            ButtonStyle::Link => base
                .text_color(colors.text_primary)
                .hover(move |s| s.text_color(colors.accent)),
        };

        styled
            .when_some(self.on_click, |d, handler| d.on_click(handler))
            .child(self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::ButtonAction;
    use gpui::{App, ClickEvent, Window};

    fn noop(_: ButtonSpec) -> ClickHandler {
        Box::new(|_: &ClickEvent, _: &mut Window, _: &mut App| {})
    }

    fn spec(style: ButtonStyle) -> ButtonSpec {
        ButtonSpec {
            id: "test-button",
            label: "Press",
            style,
            action: ButtonAction::Inert,
        }
    }

    #[test]
    fn builder_defaults() {
        let button = Button::new("b", "Label", ThemeColors::light());
        assert_eq!(button.label.as_ref(), "Label");
        assert_eq!(button.style, ButtonStyle::Primary);
        assert!(!button.full_width);
        assert!(button.on_click.is_none());
    }

    #[test]
    fn spec_buttons_are_always_wired() {
        let button = Button::for_spec(&spec(ButtonStyle::Google), ThemeColors::light(), &noop);
        assert_eq!(button.style, ButtonStyle::Google);
        assert!(button.on_click.is_some());
    }

    #[test]
    fn submit_spans_the_form() {
        let submit = Button::for_spec(&spec(ButtonStyle::Submit), ThemeColors::light(), &noop);
        let link = Button::for_spec(&spec(ButtonStyle::Link), ThemeColors::light(), &noop);
        assert!(submit.full_width);
        assert!(!link.full_width);
        assert_eq!(link.padding(), (0.0, 0.0));
    }
}
