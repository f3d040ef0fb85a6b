//! Visibility signal adapter backed by a shared flag.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::ports::VisibilitySignal;

/// Visibility flag the host (or a test) flips as the surface hides/shows.
#[derive(Debug)]
pub struct SharedVisibility {
    visible: AtomicBool,
}

impl SharedVisibility {
    /// Starts visible.
    pub fn visible() -> Self {
        Self {
            visible: AtomicBool::new(true),
        }
    }

    /// Starts hidden.
    pub fn hidden() -> Self {
        Self {
            visible: AtomicBool::new(false),
        }
    }

    /// Updates the flag.
    pub fn set_visible(&self, visible: bool) {
        self.visible.store(visible, Ordering::SeqCst);
    }
}

impl VisibilitySignal for SharedVisibility {
    fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}
