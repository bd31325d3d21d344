//! Visual-state port: the single dark-mode flag on the page root.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::cell::Cell;
use std::rc::Rc;

/// Something that can show or hide the dark-mode marker.
///
/// Updates are infallible from the caller's point of view; an implementation
/// that can fail logs and carries on.
pub trait ThemeSurface {
    /// Whether the dark-mode marker is currently shown.
    fn is_dark(&self) -> bool;

    /// Show the marker when `dark`, hide it otherwise.
    fn set_dark(&self, dark: bool);
}

impl<T: ThemeSurface + ?Sized> ThemeSurface for Rc<T> {
    fn is_dark(&self) -> bool {
        (**self).is_dark()
    }

    fn set_dark(&self, dark: bool) {
        (**self).set_dark(dark);
    }
}

/// In-memory surface that also counts how often it was written.
#[derive(Debug, Default)]
pub struct MemorySurface {
    dark: Cell<bool>,
    writes: Cell<usize>,
}

impl MemorySurface {
    pub fn new(dark: bool) -> Self {
        Self {
            dark: Cell::new(dark),
            writes: Cell::new(0),
        }
    }

    /// Number of `set_dark` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ThemeSurface for MemorySurface {
    fn is_dark(&self) -> bool {
        self.dark.get()
    }

    fn set_dark(&self, dark: bool) {
        self.dark.set(dark);
        self.writes.set(self.writes.get() + 1);
    }
}
