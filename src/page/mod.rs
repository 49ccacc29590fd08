//! Page-chrome state helpers.
//!
//! Headless state for the rest of the landing page's interactivity: the FAQ
//! accordion, the simulated contact-form submission, and the scroll-driven
//! effects. The host applies the visual classes; these types only decide
//! what the current state is.

pub mod accordion;
pub mod contact;
pub mod scroll;

pub use accordion::Accordion;
pub use contact::{ContactForm, SubmitPhase};
pub use scroll::{RevealTracker, navbar_condensed, parallax_offset};
