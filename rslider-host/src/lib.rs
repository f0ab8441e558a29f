//! Page integration for rslider.
//!
//! Mounts sliders from `data-*` attributes on form elements and reports
//! settled values back as named events, the way a server-rendered page
//! hook would. [`FormDocument`] provides the element store.
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

mod document;
mod error;
mod hook;
mod parse;

pub use crate::{
    document::{DEFAULT_DISPLAY, FormDocument, FormElement},
    error::HookError,
    hook::{CHANGE_EVENT_SUFFIX, HookEvent, SliderHook},
    parse::{BOUNDS_DELIMITER, LIST_DELIMITER, parse_number_string, parse_set, parse_values},
};
