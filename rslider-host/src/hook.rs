//! Page hook lifecycle: mount a slider from an element's dataset, re-apply
//! server-pushed selections, and tear down.
//!
//! ## Usage
//!
//! Call [`SliderHook::mounted`] when the element appears, [`SliderHook::updated`]
//! after each re-render, and [`SliderHook::destroyed`] when it leaves the
//! page. Settled changes are pushed to the sink as a [`HookEvent`] named
//! `<element id>-change`.

use std::sync::Arc;

use rslider::{
    CallbackWith, HostHandle, Px, Slider, SliderConfigBuilder, SliderError, SliderValue, Target,
};
use tracing::{debug, info};

use crate::{
    document::{FormDocument, FormElement},
    error::HookError,
    parse::{parse_number_string, parse_set, parse_values},
};

/// Suffix of the pushed event name.
pub const CHANGE_EVENT_SUFFIX: &str = "-change";

/// A change pushed back to the server.
#[derive(Debug, Clone, PartialEq)]
pub struct HookEvent {
    /// `<element id>-change`.
    pub name: String,
    /// The numeric entries of the settled value.
    pub value: Vec<f64>,
}

/// A slider mounted on a [`FormElement`].
#[derive(Debug)]
pub struct SliderHook {
    element: Arc<FormElement>,
    slider: Slider,
}

impl SliderHook {
    /// Builds a slider from the dataset of the element with `element_id`.
    ///
    /// `data-values` is required. Flags are on only when their attribute is
    /// exactly `"true"`.
    pub fn mounted(
        document: &FormDocument,
        element_id: &str,
        sink: impl Into<CallbackWith<HookEvent>>,
    ) -> Result<Self, HookError> {
        let element = document
            .get(element_id)
            .ok_or_else(|| SliderError::TargetNotFound(format!("#{element_id}")))?;
        let values = element
            .data("values")
            .ok_or(HookError::MissingAttribute("values"))?;

        let sink = sink.into();
        let name = format!("{element_id}{CHANGE_EVENT_SUFFIX}");
        let on_change = move |value: SliderValue| {
            sink.call(HookEvent {
                name: name.clone(),
                value: parse_number_string(&value.to_string()),
            })
        };

        let mut builder = SliderConfigBuilder::default()
            .target(Target::Element(Arc::clone(&element) as HostHandle))
            .values(parse_values(&values))
            .set(element.data("set").map(|set| parse_set(&set)).unwrap_or_default())
            .range(flag(&element, "range"))
            .scale(flag(&element, "scale"))
            .labels(flag(&element, "labels"))
            .tooltip(flag(&element, "tooltip"))
            .disabled(flag(&element, "disabled"))
            .on_change(on_change);
        if let Some(step) = element.data("step").and_then(|s| s.trim().parse().ok()) {
            builder = builder.step(step);
        }
        if let Some(width) = element.data("width").and_then(|w| w.trim().parse::<i32>().ok()) {
            builder = builder.width(Px::new(width));
        }

        let slider = Slider::new(builder.build()?, document)?;
        info!(element_id, "slider hook mounted");
        Ok(Self { element, slider })
    }

    /// Re-applies `data-set` after a re-render. Returns whether the
    /// selection changed.
    pub fn updated(&mut self) -> bool {
        let Some(set) = self.element.data("set").filter(|set| !set.is_empty()) else {
            return false;
        };
        let changed = self.slider.set_values(&parse_set(&set));
        debug!(element_id = self.element.id(), %set, changed, "hook updated");
        changed
    }

    /// Destroys the slider, restoring the element.
    pub fn destroyed(self) {
        info!(element_id = self.element.id(), "slider hook destroyed");
        self.slider.destroy();
    }

    /// The mounted element.
    pub fn element(&self) -> &Arc<FormElement> {
        &self.element
    }

    /// The slider.
    pub fn slider(&self) -> &Slider {
        &self.slider
    }

    /// The slider, for pointer input and polling.
    pub fn slider_mut(&mut self) -> &mut Slider {
        &mut self.slider
    }
}

fn flag(element: &FormElement, key: &str) -> bool {
    element.data(key).as_deref() == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_need_literal_true() {
        let element = FormElement::new("a")
            .with_data("range", "true")
            .with_data("scale", "TRUE")
            .with_data("labels", "1");
        assert!(flag(&element, "range"));
        assert!(!flag(&element, "scale"));
        assert!(!flag(&element, "labels"));
        assert!(!flag(&element, "tooltip"));
    }
}
