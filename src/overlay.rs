//! Modal overlay state machine for the syllabus detail view.
//!
//! Two states: `Closed` and `Open` holding the currently displayed document.
//! Every trigger is total: close triggers while `Closed` are no-ops, and
//! `show` with an unknown key leaves the state untouched. Trigger keys come
//! from page markup authored alongside the catalog, so a miss is a data bug
//! to fix there, not a condition to report to the visitor.
//!
//! The controller is a plain owned value rather than ambient page state, so
//! independent overlays can coexist and tests can drive one directly. The
//! page scroll lock is derived from the state and cannot drift from it.

use crate::catalog::{WorkshopIndex, WorkshopKey};
use crate::render::{SyllabusDocument, render};

/// Where a pointer press landed, as reported by the host surface.
///
/// Only presses on the backdrop itself dismiss the overlay; presses inside
/// the content area are inert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    Backdrop,
    Content,
}

#[derive(Debug, Default)]
enum OverlayState {
    #[default]
    Closed,
    Open(SyllabusDocument),
}

#[derive(Debug, Default)]
/// Owns the overlay's visibility state and the document it presents.
pub struct OverlayController {
    state: OverlayState,
}

impl OverlayController {
    /// A closed overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the overlay on the given workshop.
    ///
    /// Renders a fresh document on every call; showing while already open
    /// replaces the displayed document. Returns `false` and changes nothing
    /// when the key is absent from the catalog.
    pub fn show(&mut self, index: &WorkshopIndex, key: &WorkshopKey) -> bool {
        match index.workshop(key) {
            Some(workshop) => {
                self.state = OverlayState::Open(render(workshop));
                true
            }
            None => false,
        }
    }

    /// The explicit close control. No-op while closed.
    pub fn close(&mut self) {
        self.state = OverlayState::Closed;
    }

    /// A pointer press reported by the host. Dismisses only when the press
    /// landed on the backdrop.
    pub fn pointer(&mut self, target: PointerTarget) {
        if matches!(target, PointerTarget::Backdrop) {
            self.close();
        }
    }

    /// The cancel key (Escape). No-op while closed.
    pub fn cancel_key(&mut self) {
        self.close();
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open(_))
    }

    /// The document currently presented, if any. Discarded on close.
    pub fn document(&self) -> Option<&SyllabusDocument> {
        match &self.state {
            OverlayState::Open(document) => Some(document),
            OverlayState::Closed => None,
        }
    }

    /// Whether the host should suppress page scrolling. True exactly while
    /// the overlay is open.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }
}
