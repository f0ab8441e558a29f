#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc, time::Instant};

use parking_lot::{Mutex, RwLock};
use rslider::{
    CallbackWith, HostDocument, HostElement, HostHandle, PointerEvent, PointerEventContent,
    PointerId, PxPosition, SliderValue,
};

#[derive(Debug)]
pub struct TestField {
    display: RwLock<String>,
    value: RwLock<String>,
}

impl TestField {
    pub fn new(display: &str) -> Arc<Self> {
        Arc::new(Self {
            display: RwLock::new(display.to_owned()),
            value: RwLock::new(String::new()),
        })
    }
}

impl HostElement for TestField {
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

#[derive(Default)]
pub struct TestPage {
    fields: HashMap<String, Arc<TestField>>,
}

impl TestPage {
    pub fn with_field(selector: &str) -> (Self, Arc<TestField>) {
        let field = TestField::new("block");
        let mut page = Self::default();
        page.fields.insert(selector.to_owned(), Arc::clone(&field));
        (page, field)
    }
}

impl HostDocument for TestPage {
    fn query(&self, selector: &str) -> Option<HostHandle> {
        self.fields
            .get(selector)
            .map(|field| Arc::clone(field) as HostHandle)
    }
}

#[derive(Clone, Default)]
pub struct Changes(Arc<Mutex<Vec<SliderValue>>>);

impl Changes {
    pub fn callback(&self) -> CallbackWith<SliderValue> {
        let seen = Arc::clone(&self.0);
        CallbackWith::new(move |value: SliderValue| seen.lock().push(value))
    }

    pub fn seen(&self) -> Vec<SliderValue> {
        self.0.lock().clone()
    }
}

pub fn event(at: Instant, pointer_id: PointerId, x: i32, content: PointerEventContent) -> PointerEvent {
    PointerEvent::at(at, pointer_id, PxPosition::from_x(x), content)
}
