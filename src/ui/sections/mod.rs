//! Page sections.
//!
//! Static blocks that pages are assembled from. Sections own no state;
//! the window supplies click handlers and, for forms, the rendered fields.

mod auth_form;
mod footer;
mod hero;
mod logo_strip;
mod nav_bar;
mod result;
mod search_area;

pub use auth_form::AuthFormSection;
pub use footer::FooterSection;
pub use hero::HeroSection;
pub use logo_strip::LogoStripSection;
pub use nav_bar::NavBarSection;
pub use result::ResultSection;
pub use search_area::SearchAreaSection;
