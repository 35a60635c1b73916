//! Per-page input buffers.
//!
//! Inputs are uncontrolled: the buffers exist so typing shows up on screen,
//! but no page reads, validates or submits them. A fresh set is created on
//! every route change.

use tracing::debug;

use crate::pages::{FieldSpec, PageLayout};
use crate::ui::components::TextBuffer;

/// Input buffers for the page on screen plus which one has focus.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: Vec<(FieldSpec, TextBuffer)>,
    focused: Option<usize>,
}

impl FormState {
    /// Empty buffers for every input of the page at `path`.
    pub fn for_path(path: &str) -> Self {
        let fields = PageLayout::resolve(path)
            .map(|layout| {
                layout
                    .fields()
                    .map(|spec| (*spec, TextBuffer::new()))
                    .collect()
            })
            .unwrap_or_default();
        Self {
            fields,
            focused: None,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &(FieldSpec, TextBuffer)> {
        self.fields.iter()
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Focuses field `index`. Out-of-range indices are ignored.
    pub fn focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focused = Some(index);
        }
    }

    /// Clears focus. Returns `true` if a field was focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    fn cycle_focus(&mut self, backwards: bool) {
        let count = self.fields.len();
        if count == 0 {
            return;
        }
        self.focused = Some(match (self.focused, backwards) {
            (None, false) => 0,
            (None, true) => count - 1,
            (Some(i), false) => (i + 1) % count,
            (Some(i), true) => (i + count - 1) % count,
        });
    }

    /// Routes a key to the form. Returns `true` if anything visible changed.
    pub fn handle_key(&mut self, key: &str, shift: bool) -> bool {
        match key {
            "tab" => {
                self.cycle_focus(shift);
                !self.fields.is_empty()
            }
            "escape" => self.blur(),
            "enter" => {
                debug!("form has no submit handler");
                false
            }
            _ => match self.focused.and_then(|i| self.fields.get_mut(i)) {
                Some((_, buffer)) => buffer.apply_key(key, shift),
                None => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::FieldKind;

    fn texts(form: &FormState) -> Vec<String> {
        form.fields().map(|(_, b)| b.text().to_string()).collect()
    }

    #[test]
    fn sign_up_gets_three_buffers() {
        let form = FormState::for_path("/signup");
        assert_eq!(form.len(), 3);
        let kinds: Vec<_> = form.fields().map(|(spec, _)| spec.kind).collect();
        assert_eq!(
            kinds,
            vec![FieldKind::Email, FieldKind::Password, FieldKind::Password]
        );
    }

    #[test]
    fn unknown_and_static_pages_have_no_buffers() {
        assert!(FormState::for_path("/nonexistent").is_empty());
        assert!(FormState::for_path("/").is_empty());
    }

    #[test]
    fn keys_without_focus_are_dropped() {
        let mut form = FormState::for_path("/signin");
        assert!(!form.handle_key("a", false));
        assert_eq!(texts(&form), vec!["", ""]);
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = FormState::for_path("/signin");
        form.focus(1);
        for key in ["p", "w"] {
            assert!(form.handle_key(key, false));
        }
        assert_eq!(texts(&form), vec!["", "pw"]);
    }

    #[test]
    fn tab_cycles_and_wraps() {
        let mut form = FormState::for_path("/signin");
        assert!(form.handle_key("tab", false));
        assert_eq!(form.focused(), Some(0));
        form.handle_key("tab", false);
        form.handle_key("tab", false);
        assert_eq!(form.focused(), Some(0));
        form.handle_key("tab", true);
        assert_eq!(form.focused(), Some(1));
    }

    #[test]
    fn tab_on_page_without_fields_does_nothing() {
        let mut form = FormState::for_path("/");
        assert!(!form.handle_key("tab", false));
        assert_eq!(form.focused(), None);
    }

    #[test]
    fn escape_blurs() {
        let mut form = FormState::for_path("/searchpage");
        form.focus(0);
        assert!(form.handle_key("escape", false));
        assert!(!form.handle_key("escape", false));
        assert_eq!(form.focused(), None);
    }

    #[test]
    fn blur_keeps_typed_text() {
        let mut form = FormState::for_path("/signin");
        form.focus(1);
        form.handle_key("a", false);
        assert!(form.blur());
        assert!(!form.handle_key("b", false));
        assert_eq!(texts(&form), vec!["", "a"]);
    }

    #[test]
    fn enter_submits_nothing() {
        let mut form = FormState::for_path("/searchpage");
        form.focus(0);
        form.handle_key("x", false);
        assert!(!form.handle_key("enter", false));
        assert_eq!(texts(&form), vec!["x"]);
    }

    #[test]
    fn focus_out_of_range_is_ignored() {
        let mut form = FormState::for_path("/searchpage");
        form.focus(4);
        assert_eq!(form.focused(), None);
    }
}
