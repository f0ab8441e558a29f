//! The boundary to the host form field.
//!
//! A slider is bound to an existing host element. On attach the element's
//! native rendering is hidden; its value slot then mirrors the serialized
//! selection so ordinary form submission keeps working. Detaching restores
//! the element's original display.

use std::{fmt, sync::Arc};

use tracing::debug;

use crate::error::SliderError;

/// Display value that hides a host element.
pub const HIDDEN_DISPLAY: &str = "none";

/// A host form element the slider can bind to.
///
/// Methods take `&self`; implementations provide their own interior
/// mutability.
pub trait HostElement: Send + Sync {
    /// Current display mode.
    fn display(&self) -> String;
    /// Sets the display mode.
    fn set_display(&self, display: &str);
    /// Current value slot contents.
    fn value(&self) -> String;
    /// Overwrites the value slot.
    fn set_value(&self, value: &str);
}

/// Shared handle to a host element.
pub type HostHandle = Arc<dyn HostElement>;

/// Resolves selectors to host elements.
pub trait HostDocument {
    /// Looks up the element matching `selector`.
    fn query(&self, selector: &str) -> Option<HostHandle>;
}

/// How the host element is referenced in a configuration.
#[derive(Clone)]
pub enum Target {
    /// Resolve through a [`HostDocument`].
    Selector(String),
    /// Use this element directly.
    Element(HostHandle),
}

impl Target {
    /// Resolves the reference, failing with [`SliderError::TargetNotFound`].
    pub fn resolve(&self, document: &dyn HostDocument) -> Result<HostHandle, SliderError> {
        match self {
            Target::Element(handle) => Ok(Arc::clone(handle)),
            Target::Selector(selector) => document
                .query(selector)
                .ok_or_else(|| SliderError::TargetNotFound(selector.clone())),
        }
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Selector(selector) => f.debug_tuple("Selector").field(selector).finish(),
            Target::Element(_) => f.write_str("Element(..)"),
        }
    }
}

impl From<&str> for Target {
    fn from(selector: &str) -> Self {
        Target::Selector(selector.to_owned())
    }
}

impl From<String> for Target {
    fn from(selector: String) -> Self {
        Target::Selector(selector)
    }
}

impl From<HostHandle> for Target {
    fn from(handle: HostHandle) -> Self {
        Target::Element(handle)
    }
}

/// A host element while a slider is attached to it.
pub(crate) struct HostAttachment {
    element: HostHandle,
    original_display: String,
}

impl HostAttachment {
    /// Hides the element, remembering how it was displayed.
    pub(crate) fn attach(element: HostHandle) -> Self {
        let original_display = element.display();
        element.set_display(HIDDEN_DISPLAY);
        debug!(%original_display, "host element hidden");
        Self {
            element,
            original_display,
        }
    }

    pub(crate) fn mirror(&self, value: &str) {
        self.element.set_value(value);
    }

    pub(crate) fn value(&self) -> String {
        self.element.value()
    }

    /// Shows the element again as it was before attaching.
    pub(crate) fn detach(self) {
        self.element.set_display(&self.original_display);
        debug!(display = %self.original_display, "host element restored");
    }
}
