//! Visual sync: where each slider part sits for the current selection.
//!
//! [`SliderView`] is a plain snapshot a renderer can lay out directly. All
//! offsets are relative to the left edge of the track.

use crate::{
    domain::ValueDomain,
    geometry::Geometry,
    pointer::PointerTarget,
    px::{Px, PxPosition},
    scale::Tick,
    selection::{Handle, SelectionState},
};

/// Placement of one handle.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleView {
    /// Left edge of the handle, centered on its index.
    pub left: f32,
    /// Tooltip text, when tooltips are enabled.
    pub tooltip: Option<String>,
}

/// Snapshot of the rendered slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderView {
    /// Width of the track.
    pub track_width: Px,
    /// The low handle (the only handle in single mode).
    pub start_handle: HandleView,
    /// The high handle; range mode only.
    pub end_handle: Option<HandleView>,
    /// Left edge of the selected-range bar.
    pub selected_left: f32,
    /// Width of the selected-range bar.
    pub selected_width: f32,
    /// Scale ticks; empty when the scale is off.
    pub ticks: Vec<Tick>,
    /// A drag session is active.
    pub sliding: bool,
    /// Interaction is disabled.
    pub disabled: bool,
}

pub(crate) struct ViewInput<'a> {
    pub domain: &'a ValueDomain,
    pub geometry: &'a Geometry,
    pub selection: &'a SelectionState,
    pub ticks: &'a [Tick],
    pub tooltip: bool,
    pub sliding: bool,
    pub disabled: bool,
}

pub(crate) fn build_view(input: ViewInput<'_>) -> SliderView {
    let ViewInput {
        domain,
        geometry,
        selection,
        ticks,
        tooltip,
        sliding,
        disabled,
    } = input;
    let handle = |index: usize| HandleView {
        left: geometry.handle_left(index),
        tooltip: tooltip.then(|| domain.get(index).to_string()),
    };
    let (start, end) = (selection.start(), selection.end());
    let (selected_left, selected_width) = if selection.is_range() {
        (
            geometry.index_to_pixel(start),
            geometry.index_to_pixel(end - start),
        )
    } else {
        (0.0, geometry.index_to_pixel(end))
    };
    SliderView {
        track_width: geometry.track_width(),
        start_handle: handle(if selection.is_range() { start } else { end }),
        end_handle: selection.is_range().then(|| handle(end)),
        selected_left,
        selected_width,
        ticks: ticks.to_vec(),
        sliding,
        disabled,
    }
}

/// Finds the slider part under `position`. The high handle is stacked above
/// the low one, so it wins when they overlap.
pub(crate) fn hit_test(
    position: PxPosition,
    geometry: &Geometry,
    selection: &SelectionState,
    has_scale: bool,
) -> PointerTarget {
    let x = position.x.saturating_sub(geometry.track_left()).to_f32();
    let width = geometry.pointer_width().to_f32();
    let over = |index: usize| {
        let left = geometry.handle_left(index);
        x >= left && x <= left + width
    };
    if selection.is_range() && over(selection.end()) {
        return PointerTarget::Handle(Handle::End);
    }
    let low = if selection.is_range() {
        selection.start()
    } else {
        selection.end()
    };
    if over(low) {
        return PointerTarget::Handle(Handle::Start);
    }
    if has_scale {
        PointerTarget::Scale
    } else {
        PointerTarget::Track
    }
}
