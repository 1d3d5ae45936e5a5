//! Focus management utilities.
//!
//! One index into a fixed number of elements. Form fields cycle with
//! wrap-around; the navigation list clamps at both ends.

/// Tracks which of `count` elements has focus.
///
/// ```text
/// FocusManager::new(3): 0 → next → 1 → next → 2 → next → 0
/// ```
#[derive(Debug, Clone)]
pub struct FocusManager {
    current: usize,
    count: usize,
    wrap: bool,
}

impl FocusManager {
    /// Create a focus manager over `count` elements, focus on the first.
    pub fn new(count: usize) -> Self {
        Self {
            current: 0,
            count,
            wrap: true,
        }
    }

    /// Set whether focus wraps around at the ends.
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Index of the focused element.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Focus `index`; ignored when out of range.
    pub fn set(&mut self, index: usize) {
        if index < self.count {
            self.current = index;
        }
    }

    /// Move focus forward one element.
    pub fn next(&mut self) {
        if self.count == 0 {
            return;
        }

        if self.current + 1 < self.count {
            self.current += 1;
        } else if self.wrap {
            self.current = 0;
        }
    }

    /// Move focus back one element.
    pub fn prev(&mut self) {
        if self.count == 0 {
            return;
        }

        if self.current > 0 {
            self.current -= 1;
        } else if self.wrap {
            self.current = self.count - 1;
        }
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.count > 0 && self.current == index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Focus the first element.
    pub fn first(&mut self) {
        self.current = 0;
    }

    /// Focus the last element.
    pub fn last(&mut self) {
        if self.count > 0 {
            self.current = self.count - 1;
        }
    }
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new(0)
    }
}
