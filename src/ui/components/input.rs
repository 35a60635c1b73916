//! Form input component.
//!
//! The field is drawn from a [`TextBuffer`] owned elsewhere. Clicking it
//! hands focus to that buffer; typing is routed there by the window.

use gpui::{
    div, prelude::*, px, ElementId, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
};

use super::{ClickHandler, TextBuffer};
use crate::pages::{FieldKind, FieldSpec};
use crate::ui::theme::ThemeColors;

/// A single-line input field.
#[derive(IntoElement)]
pub struct TextField {
    id: ElementId,
    kind: FieldKind,
    placeholder: SharedString,
    value: SharedString,
    focused: bool,
    colors: ThemeColors,
    on_click: Option<ClickHandler>,
}

impl TextField {
    pub fn new(id: impl Into<ElementId>, spec: &FieldSpec, colors: ThemeColors) -> Self {
        Self {
            id: id.into(),
            kind: spec.kind,
            placeholder: spec.placeholder.into(),
            value: SharedString::default(),
            focused: false,
            colors,
            on_click: None,
        }
    }

    /// Shows the contents of `buffer`, masked for password fields.
    pub fn buffer(mut self, buffer: &TextBuffer) -> Self {
        self.value = buffer.display(self.kind.is_masked()).into();
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn on_click(mut self, handler: ClickHandler) -> Self {
        self.on_click = Some(handler);
        self
    }

    fn icon(&self) -> &'static str {
        match self.kind {
            FieldKind::Email => "@",
            FieldKind::Password => "*",
            FieldKind::Text => "/",
        }
    }
}

impl RenderOnce for TextField {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let colors = self.colors;
        let icon = self.icon();

        let is_empty = self.value.is_empty();
        let (display_text, text_color) = if is_empty {
            (self.placeholder, colors.text_muted)
        } else {
            (self.value, colors.text_primary)
        };
        let border_color = if self.focused {
            colors.accent
        } else {
            colors.border
        };

        div()
            .id(self.id)
            .h(px(44.0))
            .w_full()
            .px(px(14.0))
            .flex()
            .items_center()
            .gap(px(10.0))
            .bg(colors.background)
            .border_1()
            .border_color(border_color)
            .rounded(px(8.0))
            .cursor_text()
            .when_some(self.on_click, |d, handler| d.on_click(handler))
            .child(div().text_sm().text_color(colors.text_muted).child(icon))
            .child(
                div()
                    .flex_1()
                    .text_color(text_color)
                    .child(display_text),
            )
            .when(self.focused, |d| {
                d.child(div().w(px(1.0)).h(px(18.0)).bg(colors.accent))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(kind: FieldKind) -> FieldSpec {
        FieldSpec {
            kind,
            placeholder: "Placeholder",
        }
    }

    #[test]
    fn password_value_is_masked() {
        let field = TextField::new("pw", &spec(FieldKind::Password), ThemeColors::light())
            .buffer(&TextBuffer::with_text("hunter2"));
        assert_eq!(field.value.as_ref(), "\u{2022}".repeat(7));
    }

    #[test]
    fn email_value_is_shown() {
        let field = TextField::new("email", &spec(FieldKind::Email), ThemeColors::light())
            .buffer(&TextBuffer::with_text("a@b.co"))
            .focused(true);
        assert_eq!(field.value.as_ref(), "a@b.co");
        assert!(field.focused);
        assert_eq!(field.icon(), "@");
    }

    #[test]
    fn empty_field_keeps_placeholder() {
        let field = TextField::new("q", &spec(FieldKind::Text), ThemeColors::dark());
        assert!(field.value.is_empty());
        assert_eq!(field.placeholder.as_ref(), "Placeholder");
    }
}
