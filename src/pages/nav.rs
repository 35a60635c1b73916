//! Navigation bar contents.
//!
//! Links whose destination is `#` go nowhere and are inert.

use super::{ButtonAction, ButtonSpec, ButtonStyle};

const fn link(id: &'static str, label: &'static str, action: ButtonAction) -> ButtonSpec {
    ButtonSpec {
        id,
        label,
        style: ButtonStyle::Link,
        action,
    }
}

const BRAND: ButtonSpec = link("nav-brand", "Cartana", ButtonAction::Navigate("/"));

const LEFT_LINKS: [ButtonSpec; 3] = [
    link("nav-about", "About", ButtonAction::Inert),
    link("nav-pricing", "Pricing", ButtonAction::Inert),
    link(
        "nav-try-cartana",
        "Try Cartana",
        ButtonAction::Navigate("/searchpage"),
    ),
];

const RIGHT_LINKS: [ButtonSpec; 2] = [
    link("nav-help", "Help", ButtonAction::Inert),
    link("nav-login", "Login", ButtonAction::Navigate("/signin")),
];

const SIGN_UP: ButtonSpec = ButtonSpec {
    id: "nav-sign-up",
    label: "Sign Up",
    style: ButtonStyle::NavSignUp,
    action: ButtonAction::Navigate("/signup"),
};

/// The bar shown at the top of every page. Stateless.
pub struct NavBar;

impl NavBar {
    /// Brand link at the far left.
    pub fn brand() -> &'static ButtonSpec {
        &BRAND
    }

    /// First link column.
    pub fn left_links() -> &'static [ButtonSpec] {
        &LEFT_LINKS
    }

    /// Second link column.
    pub fn right_links() -> &'static [ButtonSpec] {
        &RIGHT_LINKS
    }

    /// The navigation button closing the second column.
    pub fn sign_up() -> &'static ButtonSpec {
        &SIGN_UP
    }

    /// Every control on the bar, left to right.
    pub fn items() -> impl Iterator<Item = &'static ButtonSpec> {
        std::iter::once(&BRAND)
            .chain(LEFT_LINKS.iter())
            .chain(RIGHT_LINKS.iter())
            .chain(std::iter::once(&SIGN_UP))
    }
}
