use std::sync::atomic::{AtomicBool, Ordering};

use waypoint_client::VisibilityHandle;

/// A UI region whose visibility changes are logged to stderr.
pub(crate) struct TerminalRegion {
    name: &'static str,
    visible: AtomicBool,
}

impl TerminalRegion {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            visible: AtomicBool::new(false),
        }
    }
}

impl VisibilityHandle for TerminalRegion {
    fn set_visible(&self, visible: bool) {
        if self.visible.swap(visible, Ordering::AcqRel) != visible {
            if visible {
                tracing::info!(region = self.name, "shown");
            } else {
                tracing::info!(region = self.name, "hidden");
            }
        }
    }
}
