//! Reusable UI components.
//!
//! Components are stateless `RenderOnce` elements. Anything interactive
//! receives its click handler from the owning view, so the components never
//! reach into application state themselves.

pub mod button;
pub mod image;
pub mod input;
pub mod text_buffer;

use gpui::{App, ClickEvent, Window};

use crate::pages::ButtonSpec;

pub use button::Button;
pub use image::ImageSlot;
pub use input::TextField;
pub use text_buffer::TextBuffer;

/// Boxed click listener handed to a component by its owning view.
pub type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Turns a control description into the listener that activates it.
pub type Bind<'a> = &'a dyn Fn(ButtonSpec) -> ClickHandler;
