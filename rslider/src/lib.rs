//! rslider is a headless engine for discrete sliders.
//!
//! A slider selects one value, or a low/high pair, from an ordered list of
//! values. The engine owns the selection, the pointer drag session, the
//! pixel mapping and the tick scale; the host owns painting and input.
//!
//! # Building a slider
//!
//! ```
//! use std::sync::Arc;
//!
//! use parking_lot::Mutex;
//! use rslider::{
//!     DomainValue, HostDocument, HostElement, HostHandle, Slider, SliderConfigBuilder,
//!     SliderValue, TrackMetrics,
//! };
//!
//! #[derive(Default)]
//! struct Field {
//!     display: Mutex<String>,
//!     value: Mutex<String>,
//! }
//!
//! impl HostElement for Field {
//!     fn display(&self) -> String {
//!         self.display.lock().clone()
//!     }
//!     fn set_display(&self, display: &str) {
//!         *self.display.lock() = display.to_owned();
//!     }
//!     fn value(&self) -> String {
//!         self.value.lock().clone()
//!     }
//!     fn set_value(&self, value: &str) {
//!         *self.value.lock() = value.to_owned();
//!     }
//! }
//!
//! struct Page(HostHandle);
//!
//! impl HostDocument for Page {
//!     fn query(&self, selector: &str) -> Option<HostHandle> {
//!         (selector == "#volume").then(|| Arc::clone(&self.0))
//!     }
//! }
//!
//! let page = Page(Arc::new(Field::default()));
//! let config = SliderConfigBuilder::default()
//!     .target("#volume")
//!     .values(0.0..=10.0)
//!     .set(vec![DomainValue::from(4)])
//!     .build()
//!     .unwrap();
//!
//! let mut slider = Slider::new(config, &page).unwrap();
//! slider.measure(TrackMetrics::new(0, 500, 20));
//!
//! assert_eq!(slider.value(), SliderValue::Single(DomainValue::from(4)));
//! assert_eq!(slider.host_value(), "4");
//! assert_eq!(page.0.display(), "none");
//! ```
//!
//! # Pointer input
//!
//! Hosts translate their native input into [`PointerEvent`]s. Use
//! [`Slider::hit_test`] to decide what a press landed on, then feed the
//! press, the following moves and the release to [`Slider::handle_pointer`].
//! Only the pointer that started a drag can move or end it.
//!
//! # Change notification
//!
//! Changes are coalesced: the `on_change` handler sees the settled value
//! once no change has happened for [`DEBOUNCE_WINDOW`]. Delivery happens in
//! [`Slider::poll`], which the host calls from its event loop, using
//! [`Slider::pending_deadline`] to know when to wake up.
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod domain;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod host;
pub mod notifier;
pub mod pointer;
pub mod prop;
pub mod px;
pub mod scale;
pub mod selection;
mod slider;
pub mod value;
pub mod view;

pub use crate::{
    config::{InitialSet, SliderConfig, SliderConfigBuilder, SliderConfigBuilderError},
    domain::{DomainSource, ValueDomain},
    drag::DragState,
    error::{DomainError, SliderError},
    geometry::{Geometry, TrackMetrics},
    host::{HIDDEN_DISPLAY, HostDocument, HostElement, HostHandle, Target},
    notifier::DEBOUNCE_WINDOW,
    pointer::{PointerEvent, PointerEventContent, PointerId, PointerTarget},
    prop::CallbackWith,
    px::{Px, PxPosition},
    scale::{ScaleOptions, Tick},
    selection::{Handle, SelectionState},
    slider::Slider,
    value::{DomainValue, SliderValue, VALUE_DELIMITER},
    view::{HandleView, SliderView},
};
