//! Widget State
//!
//! Plain state machines behind the mobile menu and the home carousel,
//! kept free of DOM types.

/// Mobile navigation menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    pub open: bool,
}

impl NavMenu {
    /// Flip the menu; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A click anywhere on the page closes the open menu unless it landed
    /// inside the menu or on its toggle
    pub fn document_click(&mut self, inside_menu: bool, on_toggle: bool) {
        if self.open && !inside_menu && !on_toggle {
            self.open = false;
        }
    }

    /// Value for the toggle's `aria-expanded`
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

/// Auto-advancing slide show position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    paused: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            paused: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Timer tick: move to the next slide, wrapping at the end
    pub fn tick(&mut self) {
        if !self.paused {
            self.next();
        }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to a slide; out-of-range indexes are ignored
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}
