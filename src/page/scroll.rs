//! Scroll-driven effects: navbar condensing, reveal tracking, parallax.

use std::collections::BTreeSet;

/// Scroll depth, in px, past which the navbar takes its condensed style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Visibility fraction at which an element counts as intersecting.
///
/// Exported for the host's observer configuration; the tracker itself only
/// consumes the resulting intersection reports.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom root-margin, in px, shrinking the observer viewport so elements
/// reveal slightly before they reach the fold.
pub const REVEAL_BOTTOM_MARGIN: f64 = -50.0;

const PARALLAX_BASE_SPEED: f64 = 0.08;
const PARALLAX_SPEED_STEP: f64 = 0.04;

/// Whether the navbar should use its condensed (scrolled) style.
pub fn navbar_condensed(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

/// Vertical offset for a hero shape at the given scroll depth. Each shape
/// scrolls slightly faster than the one before it.
pub fn parallax_offset(scroll_y: f64, shape_index: usize) -> f64 {
    scroll_y * (PARALLAX_BASE_SPEED + shape_index as f64 * PARALLAX_SPEED_STEP)
}

/// Remembers which elements have scrolled into view.
///
/// Reveals are one-way: once an element has intersected it stays revealed,
/// so scrolling back up never replays the entrance animation.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: BTreeSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intersection report for `element`. Returns `true` when this
    /// report is the one that reveals it.
    pub fn observe(&mut self, element: &str, intersecting: bool) -> bool {
        if intersecting && !self.revealed.contains(element) {
            self.revealed.insert(element.to_string());
            return true;
        }
        false
    }

    pub fn is_revealed(&self, element: &str) -> bool {
        self.revealed.contains(element)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_condenses_past_the_threshold() {
        assert!(!navbar_condensed(0.0));
        assert!(!navbar_condensed(50.0));
        assert!(navbar_condensed(50.5));
        assert!(navbar_condensed(400.0));
    }

    #[test]
    fn parallax_speed_grows_with_shape_index() {
        assert_eq!(parallax_offset(100.0, 0), 8.0);
        assert_eq!(parallax_offset(100.0, 1), 12.0);
        assert_eq!(parallax_offset(100.0, 2), 16.0);
        assert_eq!(parallax_offset(0.0, 3), 0.0);
    }

    #[test]
    fn reveals_are_one_way() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.observe("hero", false));
        assert!(!tracker.is_revealed("hero"));

        assert!(tracker.observe("hero", true));
        assert!(tracker.is_revealed("hero"));

        // Leaving the viewport does not un-reveal.
        assert!(!tracker.observe("hero", false));
        assert!(tracker.is_revealed("hero"));

        // Re-entering is not a fresh reveal.
        assert!(!tracker.observe("hero", true));
        assert_eq!(tracker.revealed_count(), 1);
    }
}
