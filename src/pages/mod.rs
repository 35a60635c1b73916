//! Page composition.
//!
//! Every page is the navigation bar followed by a fixed, ordered run of
//! sections. Layouts are plain data: the views in [`crate::ui`] render them,
//! and tests can inspect them without opening a window.

mod nav;

pub use nav::NavBar;

use tracing::debug;

use crate::routes::{Navigator, Route};

/// What activating a control does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Request a route change to the given path.
    Navigate(&'static str),
    /// Nothing. No handler is wired for this control yet.
    Inert,
}

/// Visual treatment of a button or link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Filled call-to-action.
    Primary,
    /// Outlined call-to-action.
    Secondary,
    /// Pill button at the end of the navigation bar.
    NavSignUp,
    /// Social sign-in button.
    Google,
    /// Full-width form submit.
    Submit,
    /// Search submit.
    Search,
    /// Plain text link.
    Link,
}

/// A clickable control on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub style: ButtonStyle,
    pub action: ButtonAction,
}

impl ButtonSpec {
    /// Performs this control's action against `navigator`.
    pub fn activate(&self, navigator: &mut dyn Navigator) {
        match self.action {
            ButtonAction::Navigate(path) => navigator.navigate(path),
            ButtonAction::Inert => debug!(control = self.id, "control has no handler"),
        }
    }
}

/// Kind of form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Password,
    Text,
}

impl FieldKind {
    /// Whether typed text is masked on screen.
    pub fn is_masked(self) -> bool {
        matches!(self, FieldKind::Password)
    }
}

/// An uncontrolled form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub kind: FieldKind,
    pub placeholder: &'static str,
}

/// A static image slot, identified by its alt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSpec {
    pub alt: &'static str,
}

/// Which of the two account forms to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// A presentational block of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    LogoStrip,
    Footer,
    SearchArea,
    ResultPlaceholder,
    AuthForm(AuthMode),
}

const HERO_BUTTONS: [ButtonSpec; 2] = [
    ButtonSpec {
        id: "hero-try-it-out",
        label: "Try it out",
        style: ButtonStyle::Primary,
        action: ButtonAction::Inert,
    },
    ButtonSpec {
        id: "hero-create-account",
        label: "Create your Cartana account",
        style: ButtonStyle::Secondary,
        action: ButtonAction::Inert,
    },
];

const SEARCH_BUTTONS: [ButtonSpec; 1] = [ButtonSpec {
    id: "search-submit",
    label: "Search Cartana",
    style: ButtonStyle::Search,
    action: ButtonAction::Inert,
}];

const SIGN_IN_BUTTONS: [ButtonSpec; 3] = [
    ButtonSpec {
        id: "signin-to-signup",
        label: "Sign Up",
        style: ButtonStyle::Link,
        action: ButtonAction::Navigate("/signup"),
    },
    ButtonSpec {
        id: "signin-google",
        label: "Sign In with Google",
        style: ButtonStyle::Google,
        action: ButtonAction::Inert,
    },
    ButtonSpec {
        id: "signin-submit",
        label: "Sign In",
        style: ButtonStyle::Submit,
        action: ButtonAction::Inert,
    },
];

const SIGN_UP_BUTTONS: [ButtonSpec; 2] = [
    ButtonSpec {
        id: "signup-google",
        label: "Sign Up with Google",
        style: ButtonStyle::Google,
        action: ButtonAction::Inert,
    },
    ButtonSpec {
        id: "signup-submit",
        label: "Sign Up",
        style: ButtonStyle::Submit,
        action: ButtonAction::Inert,
    },
];

const SEARCH_FIELDS: [FieldSpec; 1] = [FieldSpec {
    kind: FieldKind::Text,
    placeholder: "Try JBL headphones",
}];

const SIGN_IN_FIELDS: [FieldSpec; 2] = [
    FieldSpec {
        kind: FieldKind::Email,
        placeholder: "Email",
    },
    FieldSpec {
        kind: FieldKind::Password,
        placeholder: "Password",
    },
];

const SIGN_UP_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        kind: FieldKind::Email,
        placeholder: "Email",
    },
    FieldSpec {
        kind: FieldKind::Password,
        placeholder: "Password",
    },
    FieldSpec {
        kind: FieldKind::Password,
        placeholder: "Confirm Password",
    },
];

const HERO_IMAGES: [ImageSpec; 1] = [ImageSpec {
    alt: "Person using Cartana on a computer",
}];

const PARTNER_LOGOS: [ImageSpec; 3] = [
    ImageSpec { alt: "jumia logo" },
    ImageSpec { alt: "amazon logo" },
    ImageSpec { alt: "ebay logo" },
];

const AUTH_IMAGES: [ImageSpec; 1] = [ImageSpec {
    alt: "Cartana Illustration",
}];

impl Section {
    /// Main heading of the section.
    pub fn heading(self) -> &'static str {
        match self {
            Section::Hero => "Find any product on the internet with Cartana",
            Section::LogoStrip => "Search from top sites",
            Section::Footer => "Cartana",
            Section::SearchArea => "Start here. What product are you searching for?",
            Section::ResultPlaceholder => "Results",
            Section::AuthForm(AuthMode::SignIn) => "Sign In",
            Section::AuthForm(AuthMode::SignUp) => "Sign Up",
        }
    }

    /// Form inputs, in display order.
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Section::SearchArea => &SEARCH_FIELDS,
            Section::AuthForm(AuthMode::SignIn) => &SIGN_IN_FIELDS,
            Section::AuthForm(AuthMode::SignUp) => &SIGN_UP_FIELDS,
            _ => &[],
        }
    }

    /// Clickable controls, in display order.
    pub fn buttons(self) -> &'static [ButtonSpec] {
        match self {
            Section::Hero => &HERO_BUTTONS,
            Section::SearchArea => &SEARCH_BUTTONS,
            Section::AuthForm(AuthMode::SignIn) => &SIGN_IN_BUTTONS,
            Section::AuthForm(AuthMode::SignUp) => &SIGN_UP_BUTTONS,
            _ => &[],
        }
    }

    /// Image slots, in display order.
    pub fn images(self) -> &'static [ImageSpec] {
        match self {
            Section::Hero => &HERO_IMAGES,
            Section::LogoStrip => &PARTNER_LOGOS,
            Section::AuthForm(_) => &AUTH_IMAGES,
            _ => &[],
        }
    }
}

/// The composition of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub route: Route,
    pub sections: &'static [Section],
}

impl PageLayout {
    /// Layout of the page mounted at `route`.
    pub fn for_route(route: Route) -> Self {
        let sections: &'static [Section] = match route {
            Route::Home => &[Section::Hero, Section::LogoStrip, Section::Footer],
            Route::SearchPage => &[Section::SearchArea],
            Route::ResultPage => &[Section::ResultPlaceholder],
            Route::SignIn => &[Section::AuthForm(AuthMode::SignIn)],
            Route::SignUp => &[Section::AuthForm(AuthMode::SignUp)],
        };
        Self { route, sections }
    }

    /// Layout of the page at `path`, or `None` when nothing is mounted there.
    pub fn resolve(path: &str) -> Option<Self> {
        Route::from_path(path).map(Self::for_route)
    }

    /// All form inputs across the page's sections.
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.sections.iter().flat_map(|section| section.fields())
    }

    /// All controls on the page, navigation bar first.
    pub fn buttons(&self) -> impl Iterator<Item = &'static ButtonSpec> {
        NavBar::items().chain(self.sections.iter().flat_map(|section| section.buttons()))
    }

    /// First control with the given label. Navigation bar controls win.
    pub fn find_button(&self, label: &str) -> Option<&'static ButtonSpec> {
        self.buttons().find(|button| button.label == label)
    }
}
