//! Slider configuration.
//!
//! ## Usage
//!
//! Build a [`SliderConfig`] with [`SliderConfigBuilder`]; only `target` and
//! `values` are required.
//!
//! ```
//! use rslider::{DomainValue, SliderConfigBuilder};
//!
//! let config = SliderConfigBuilder::default()
//!     .target("#price")
//!     .values(0.0..=100.0)
//!     .step(5.0)
//!     .range(true)
//!     .set(vec![DomainValue::from(20), DomainValue::from(80)])
//!     .build()
//!     .unwrap();
//! assert!(config.labels && config.scale && config.tooltip);
//! ```

use derive_builder::Builder;
use smallvec::SmallVec;

use crate::{
    domain::DomainSource,
    host::Target,
    prop::CallbackWith,
    px::Px,
    scale::ScaleOptions,
    value::{DomainValue, SliderValue},
};

/// Requested initial selection: `[start]` or `[start, end]`.
pub type InitialSet = SmallVec<[DomainValue; 2]>;

/// Immutable construction options for a [`crate::Slider`].
#[derive(Builder, Clone, Debug)]
#[builder(pattern = "owned")]
pub struct SliderConfig {
    /// The host element to bind to.
    #[builder(setter(into))]
    pub target: Target,
    /// The selectable values.
    #[builder(setter(into))]
    pub values: DomainSource,
    /// Distance between generated values; bounds sources only.
    #[builder(default, setter(strip_option))]
    pub step: Option<f64>,
    /// Initial selection, matched exactly against the domain.
    #[builder(default, setter(into))]
    pub set: InitialSet,
    /// Two-endpoint selection.
    #[builder(default)]
    pub range: bool,
    /// Fixed track width, overriding the measured one.
    #[builder(default, setter(strip_option, into))]
    pub width: Option<Px>,
    /// Label every scale tick.
    #[builder(default = "true")]
    pub labels: bool,
    /// Draw the tick scale.
    #[builder(default = "true")]
    pub scale: bool,
    /// Show a value bubble on each handle.
    #[builder(default = "true")]
    pub tooltip: bool,
    /// Start disabled.
    #[builder(default)]
    pub disabled: bool,
    /// Receives the settled value after each burst of changes.
    #[builder(default, setter(strip_option, into))]
    pub on_change: Option<CallbackWith<SliderValue>>,
}

impl SliderConfig {
    pub(crate) fn scale_options(&self) -> ScaleOptions {
        ScaleOptions {
            scale: self.scale,
            labels: self.labels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_defaults() {
        let config = SliderConfigBuilder::default()
            .target("#size")
            .values(vec![DomainValue::from("S"), DomainValue::from("M")])
            .build()
            .unwrap();
        assert!(!config.range);
        assert!(!config.disabled);
        assert!(config.labels && config.scale && config.tooltip);
        assert_eq!(config.step, None);
        assert_eq!(config.width, None);
        assert!(config.set.is_empty());
        assert!(config.on_change.is_none());
    }

    #[test]
    fn target_and_values_are_required() {
        assert!(SliderConfigBuilder::default().target("#x").build().is_err());
        assert!(
            SliderConfigBuilder::default()
                .values(0.0..=1.0)
                .build()
                .is_err()
        );
    }

    #[test]
    fn setters_convert_inputs() {
        let config = SliderConfigBuilder::default()
            .target("#x")
            .values(0.0..=10.0)
            .width(320)
            .on_change(|_: SliderValue| {})
            .build()
            .unwrap();
        assert_eq!(config.width, Some(Px(320)));
        assert!(config.on_change.is_some());
        assert_eq!(
            config.scale_options(),
            ScaleOptions {
                scale: true,
                labels: true
            }
        );
    }
}
