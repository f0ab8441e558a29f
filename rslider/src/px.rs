//! Physical pixel coordinates for slider measurement and pointer input.
//!
//! Hosts report track bounds and pointer positions in physical pixels. All
//! selection logic is done in domain indices; pixels are only a view onto
//! them, converted by [`crate::geometry::Geometry`].
//!
//! # Example
//!
//! ```
//! use rslider::px::{Px, PxPosition};
//!
//! let track_left = Px::new(40);
//! let pointer = PxPosition::new(Px::new(100), Px::new(12));
//!
//! assert_eq!(pointer.x.saturating_sub(track_left), Px::new(60));
//! ```

/// A physical pixel coordinate.
///
/// Negative values are allowed: a pointer captured during a drag keeps
/// reporting positions after it leaves the track on the left.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Wraps a raw pixel count.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// The raw pixel count.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// The pixel count as `f32`, for sub-pixel step arithmetic.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Distance from `origin`, saturating instead of overflowing for
    /// pointers far outside the track.
    pub fn saturating_sub(self, origin: Self) -> Self {
        Px(self.0.saturating_sub(origin.0))
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value)
    }
}

/// A pointer position.
///
/// Only `x` drives the slider; `y` is carried through as the host reports
/// it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// Horizontal coordinate.
    pub x: Px,
    /// Vertical coordinate.
    pub y: Px,
}

impl PxPosition {
    /// Creates a position from both coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Creates a position on the horizontal axis.
    pub const fn from_x(x: i32) -> Self {
        Self { x: Px(x), y: Px(0) }
    }
}
