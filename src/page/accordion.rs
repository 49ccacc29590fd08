//! FAQ accordion exclusivity.

/// Tracks which FAQ item is expanded. At most one item is open at a time;
/// opening an item collapses whichever other item was open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// An accordion over `len` items, all collapsed.
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Toggle item `index`: collapse it if it was open, otherwise open it
    /// and collapse everything else. Out-of-range indices are no-ops.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// The currently expanded item, if any.
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
