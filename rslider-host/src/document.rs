//! An in-memory form document.
//!
//! [`FormDocument`] stands in for the page a slider lives in: a set of
//! [`FormElement`]s addressed by id, each carrying `data-*` attributes, a
//! display mode and a value slot.

use std::sync::Arc;

use parking_lot::RwLock;
use rslider::{HostDocument, HostElement, HostHandle};
use rustc_hash::FxHashMap as HashMap;
use tracing::trace;

/// Display mode elements start with.
pub const DEFAULT_DISPLAY: &str = "block";

/// A form field with a dataset.
#[derive(Debug)]
pub struct FormElement {
    id: String,
    dataset: RwLock<HashMap<String, String>>,
    display: RwLock<String>,
    value: RwLock<String>,
}

impl FormElement {
    /// Creates an empty, visible element.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            dataset: RwLock::new(HashMap::default()),
            display: RwLock::new(DEFAULT_DISPLAY.to_owned()),
            value: RwLock::new(String::new()),
        }
    }

    /// Adds a `data-<key>` attribute.
    pub fn with_data(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dataset.write().insert(key.into(), value.into());
        self
    }

    /// Sets the initial display mode.
    pub fn with_display(self, display: impl Into<String>) -> Self {
        *self.display.write() = display.into();
        self
    }

    /// The element id, without the leading `#`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Reads `data-<key>`.
    pub fn data(&self, key: &str) -> Option<String> {
        self.dataset.read().get(key).cloned()
    }

    /// Writes `data-<key>`, as a server re-render would.
    pub fn set_data(&self, key: impl Into<String>, value: impl Into<String>) {
        self.dataset.write().insert(key.into(), value.into());
    }

    /// Removes `data-<key>`.
    pub fn remove_data(&self, key: &str) -> Option<String> {
        self.dataset.write().remove(key)
    }
}

impl HostElement for FormElement {
    fn display(&self) -> String {
        self.display.read().clone()
    }

    fn set_display(&self, display: &str) {
        *self.display.write() = display.to_owned();
    }

    fn value(&self) -> String {
        self.value.read().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.write() = value.to_owned();
    }
}

/// Elements addressed by id.
#[derive(Debug, Default)]
pub struct FormDocument {
    elements: RwLock<HashMap<String, Arc<FormElement>>>,
}

impl FormDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `element`, replacing any element with the same id.
    pub fn insert(&self, element: FormElement) -> Arc<FormElement> {
        let element = Arc::new(element);
        self.elements
            .write()
            .insert(element.id.clone(), Arc::clone(&element));
        element
    }

    /// Looks up an element by id.
    pub fn get(&self, id: &str) -> Option<Arc<FormElement>> {
        self.elements.read().get(id).cloned()
    }

    /// Removes an element by id.
    pub fn remove(&self, id: &str) -> Option<Arc<FormElement>> {
        self.elements.write().remove(id)
    }
}

impl HostDocument for FormDocument {
    /// Only `#id` selectors are understood.
    fn query(&self, selector: &str) -> Option<HostHandle> {
        let Some(id) = selector.strip_prefix('#') else {
            trace!(selector, "unsupported selector");
            return None;
        };
        self.get(id).map(|element| element as HostHandle)
    }
}
