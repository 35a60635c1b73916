//! Main application window
//!
//! Renders the navigation bar and sections of the page mounted at the
//! current path. A path with no page renders an empty window.

use gpui::{
    div, prelude::*, AnyElement, ClickEvent, Context, FocusHandle, Focusable, IntoElement,
    KeyDownEvent, ParentElement, Render, SharedString, Styled, Window,
};
use tracing::warn;

use super::FormState;
use crate::app::{GoBack, GoForward};
use crate::pages::{ButtonAction, ButtonSpec, PageLayout, Section};
use crate::routes::{Route, Router};
use crate::ui::components::{ClickHandler, TextField};
use crate::ui::sections::{
    AuthFormSection, FooterSection, HeroSection, LogoStripSection, NavBarSection, ResultSection,
    SearchAreaSection,
};
use crate::ui::theme::Theme;

pub struct MainWindow {
    theme: Theme,
    focus_handle: FocusHandle,
    router: Router,
    form: FormState,
}

impl MainWindow {
    pub fn new(router: Router, theme: Theme, _window: &mut Window, cx: &mut Context<Self>) -> Self {
        if router.current_route().is_none() {
            warn!(path = %router.current_path(), "no page is mounted at the initial path");
        }
        let form = FormState::for_path(router.current_path());

        Self {
            theme,
            focus_handle: cx.focus_handle(),
            router,
            form,
        }
    }

    /// Activates a control. Only navigation changes what is on screen.
    fn dispatch(&mut self, spec: ButtonSpec, cx: &mut Context<Self>) {
        spec.activate(&mut self.router);
        if let ButtonAction::Navigate(_) = spec.action {
            self.page_changed(cx);
        }
    }

    fn go_back(&mut self, cx: &mut Context<Self>) {
        if self.router.back() {
            self.page_changed(cx);
        }
    }

    fn go_forward(&mut self, cx: &mut Context<Self>) {
        if self.router.forward() {
            self.page_changed(cx);
        }
    }

    fn page_changed(&mut self, cx: &mut Context<Self>) {
        self.form = FormState::for_path(self.router.current_path());
        cx.notify();
    }

    fn focus_field(&mut self, index: usize, window: &mut Window, cx: &mut Context<Self>) {
        window.focus(&self.focus_handle);
        self.form.focus(index);
        cx.notify();
    }

    fn handle_key(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        // Modified keys belong to keybindings.
        if keystroke.modifiers.platform || keystroke.modifiers.control || keystroke.modifiers.alt {
            return;
        }
        if self.form.handle_key(&keystroke.key, keystroke.modifiers.shift) {
            cx.notify();
        }
    }

    fn render_fields(&self, cx: &Context<Self>) -> Vec<TextField> {
        let colors = self.theme.colors;
        self.form
            .fields()
            .enumerate()
            .map(|(index, (spec, buffer))| {
                let on_click: ClickHandler =
                    Box::new(cx.listener(move |this, _: &ClickEvent, window, cx| {
                        this.focus_field(index, window, cx);
                    }));
                TextField::new(SharedString::from(format!("field-{index}")), spec, colors)
                    .buffer(buffer)
                    .focused(self.form.focused() == Some(index))
                    .on_click(on_click)
            })
            .collect()
    }

    fn render_page(&self, route: Route, cx: &Context<Self>) -> AnyElement {
        let colors = self.theme.colors;
        let layout = PageLayout::for_route(route);
        let bind = |spec: ButtonSpec| -> ClickHandler {
            Box::new(cx.listener(move |this, _: &ClickEvent, _, cx| this.dispatch(spec, cx)))
        };
        let mut fields = self.render_fields(cx);

        div()
            .w_full()
            .flex()
            .flex_col()
            .child(NavBarSection::new(colors, &bind))
            .children(layout.sections.iter().map(|section| match *section {
                Section::Hero => HeroSection::new(colors, &bind).into_any_element(),
                Section::LogoStrip => LogoStripSection::new(colors).into_any_element(),
                Section::Footer => FooterSection::new(colors).into_any_element(),
                Section::SearchArea => {
                    SearchAreaSection::new(colors, std::mem::take(&mut fields), &bind)
                        .into_any_element()
                }
                Section::ResultPlaceholder => ResultSection::new(colors).into_any_element(),
                Section::AuthForm(mode) => {
                    AuthFormSection::new(mode, colors, std::mem::take(&mut fields), &bind)
                        .into_any_element()
                }
            }))
            .into_any_element()
    }
}

impl Focusable for MainWindow {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for MainWindow {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = self.theme.colors;
        let route = self.router.current_route();
        window.set_window_title(route.map(Route::title).unwrap_or("Cartana"));
        let page = route.map(|route| self.render_page(route, cx));

        div()
            .id("main-window")
            .key_context("CartanaWindow")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.handle_key(event, cx);
            }))
            .on_action(cx.listener(|this, _: &GoBack, _, cx| this.go_back(cx)))
            .on_action(cx.listener(|this, _: &GoForward, _, cx| this.go_forward(cx)))
            .size_full()
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .bg(colors.background)
            .text_color(colors.text_primary)
            .children(page)
    }
}
