//! Pixel/index conversion for the slider track.
//!
//! ## Usage
//!
//! Measure the track with [`Geometry::measure`] whenever the host reports a
//! layout change, then map pointer x positions to domain indices with
//! [`Geometry::pixel_to_index`].

use crate::px::Px;

/// Layout facts reported by the host for one measurement pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TrackMetrics {
    /// Left edge of the track in the pointer's coordinate space.
    pub left: Px,
    /// Rendered width of the track.
    pub width: Px,
    /// Rendered width of one handle.
    pub pointer_width: Px,
}

impl TrackMetrics {
    /// Creates metrics from raw pixel values.
    pub fn new(left: i32, width: i32, pointer_width: i32) -> Self {
        Self {
            left: Px(left),
            width: Px(width),
            pointer_width: Px(pointer_width),
        }
    }
}

/// Measured track geometry for a domain of a given length.
///
/// Derived state: rebuilt on every resize, never mutated mid-gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    track_left: Px,
    track_width: Px,
    pointer_width: Px,
    len: usize,
    step_px: f32,
}

impl Geometry {
    /// Geometry before the first measurement; maps no pixel to any index.
    pub fn unmeasured(len: usize) -> Self {
        Self::measure(TrackMetrics::default(), len, None)
    }

    /// Builds geometry from host metrics. A configured `width_override`
    /// replaces the measured track width.
    pub fn measure(metrics: TrackMetrics, len: usize, width_override: Option<Px>) -> Self {
        let track_width = width_override.unwrap_or(metrics.width);
        let step_px = if len > 1 && track_width.0 > 0 {
            track_width.to_f32() / (len - 1) as f32
        } else {
            0.0
        };
        Self {
            track_left: metrics.left,
            track_width,
            pointer_width: metrics.pointer_width,
            len,
            step_px,
        }
    }

    /// Pixel distance between adjacent indices.
    pub fn step_px(&self) -> f32 {
        self.step_px
    }

    /// Left edge of the track.
    pub fn track_left(&self) -> Px {
        self.track_left
    }

    /// Width of the track.
    pub fn track_width(&self) -> Px {
        self.track_width
    }

    /// Width of one handle.
    pub fn pointer_width(&self) -> Px {
        self.pointer_width
    }

    /// Whether the track has a usable width.
    pub fn is_measured(&self) -> bool {
        self.step_px > 0.0
    }

    /// Maps an x coordinate to the nearest index, clamped into the domain.
    ///
    /// Returns `None` while the track has no usable width.
    ///
    /// ```
    /// use rslider::geometry::{Geometry, TrackMetrics};
    /// use rslider::px::Px;
    ///
    /// let geometry = Geometry::measure(TrackMetrics::new(10, 100, 8), 11, None);
    /// assert_eq!(geometry.pixel_to_index(Px(80)), Some(7));
    /// assert_eq!(geometry.pixel_to_index(Px(-500)), Some(0));
    /// assert_eq!(geometry.pixel_to_index(Px(500)), Some(10));
    /// ```
    pub fn pixel_to_index(&self, x: Px) -> Option<usize> {
        if !self.is_measured() {
            return None;
        }
        let raw = (x.saturating_sub(self.track_left).to_f32() / self.step_px).round();
        let max = (self.len - 1) as f32;
        Some(raw.clamp(0.0, max) as usize)
    }

    /// Offset of `index` from the track's left edge.
    pub fn index_to_pixel(&self, index: usize) -> f32 {
        index as f32 * self.step_px
    }

    /// Left offset for a handle centered on `index`.
    pub fn handle_left(&self, index: usize) -> f32 {
        self.index_to_pixel(index) - self.pointer_width.to_f32() / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_spans_track_between_first_and_last_index() {
        let geometry = Geometry::measure(TrackMetrics::new(0, 400, 10), 5, None);
        assert_eq!(geometry.step_px(), 100.0);
        assert_eq!(geometry.index_to_pixel(3), 300.0);
        assert_eq!(geometry.handle_left(3), 295.0);
    }

    #[test]
    fn pixel_rounds_to_nearest_index() {
        let geometry = Geometry::measure(TrackMetrics::new(20, 400, 10), 5, None);
        assert_eq!(geometry.pixel_to_index(Px(20)), Some(0));
        assert_eq!(geometry.pixel_to_index(Px(69)), Some(0));
        assert_eq!(geometry.pixel_to_index(Px(70)), Some(1));
        assert_eq!(geometry.pixel_to_index(Px(270)), Some(3));
        assert_eq!(geometry.pixel_to_index(Px(420)), Some(4));
    }

    #[test]
    fn pixels_outside_track_clamp_to_ends() {
        let geometry = Geometry::measure(TrackMetrics::new(50, 200, 10), 9, None);
        assert_eq!(geometry.pixel_to_index(Px(0)), Some(0));
        assert_eq!(geometry.pixel_to_index(Px(-1000)), Some(0));
        assert_eq!(geometry.pixel_to_index(Px(251)), Some(8));
        assert_eq!(geometry.pixel_to_index(Px(i32::MAX)), Some(8));
    }

    #[test]
    fn width_override_replaces_measured_width() {
        let geometry = Geometry::measure(TrackMetrics::new(0, 999, 10), 3, Some(Px(200)));
        assert_eq!(geometry.track_width(), Px(200));
        assert_eq!(geometry.step_px(), 100.0);
    }

    #[test]
    fn unmeasured_track_maps_nothing() {
        let geometry = Geometry::unmeasured(4);
        assert!(!geometry.is_measured());
        assert_eq!(geometry.pixel_to_index(Px(10)), None);

        let collapsed = Geometry::measure(TrackMetrics::new(0, 0, 10), 4, None);
        assert_eq!(collapsed.pixel_to_index(Px(10)), None);
    }
}
