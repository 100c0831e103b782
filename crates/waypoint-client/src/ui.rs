//! Handles to the UI regions the handler drives.
//!
//! The host supplies these; the handler never looks regions up by itself.

use std::sync::{Arc, Mutex, PoisonError};

use waypoint_core::FormValues;

/// The trip form. Yields its current raw values.
pub trait FormHandle: Send + Sync {
    fn values(&self) -> FormValues;
}

/// A region that can be shown or hidden.
pub trait VisibilityHandle: Send + Sync {
    fn set_visible(&self, visible: bool);
}

/// A region whose markup is replaced wholesale.
pub trait ContentHandle: Send + Sync {
    fn replace(&self, html: String);
}

/// The four regions owned by one handler.
#[derive(Clone)]
pub struct UiHandles {
    pub form: Arc<dyn FormHandle>,
    pub loading: Arc<dyn VisibilityHandle>,
    pub results: Arc<dyn VisibilityHandle>,
    pub content: Arc<dyn ContentHandle>,
}

/// A form whose values are fixed at construction.
#[derive(Debug, Clone)]
pub struct StaticForm(FormValues);

impl StaticForm {
    #[must_use]
    pub fn new(values: FormValues) -> Self {
        Self(values)
    }
}

impl FormHandle for StaticForm {
    fn values(&self) -> FormValues {
        self.0.clone()
    }
}

/// Content region held in memory.
#[derive(Debug, Default)]
pub struct BufferedContent {
    html: Mutex<String>,
}

impl BufferedContent {
    /// The markup currently in the region.
    #[must_use]
    pub fn html(&self) -> String {
        self.html
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ContentHandle for BufferedContent {
    fn replace(&self, html: String) {
        *self.html.lock().unwrap_or_else(PoisonError::into_inner) = html;
    }
}
