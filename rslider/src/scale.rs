//! Tick and label generation for the scale under the track.

use crate::domain::ValueDomain;

/// One tick of the scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Share of the track width this tick spans; zero for the closing tick.
    pub width_percent: f32,
    /// Text shown under the tick, if any.
    pub label: Option<String>,
}

/// Display toggles that shape the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleOptions {
    /// Draw the scale at all.
    pub scale: bool,
    /// Label every tick instead of only the first and last.
    pub labels: bool,
}

/// Builds the ticks for `domain`. Empty when the scale is turned off.
///
/// The first and last tick are always labeled so the bounds stay legible.
///
/// ```
/// use rslider::domain::ValueDomain;
/// use rslider::scale::{ScaleOptions, render_scale};
///
/// let domain = ValueDomain::from_bounds(0.0, 4.0, None).unwrap();
/// let ticks = render_scale(&domain, ScaleOptions { scale: true, labels: false });
/// assert_eq!(ticks.len(), 5);
/// assert_eq!(ticks[0].width_percent, 25.0);
/// assert_eq!(ticks[4].width_percent, 0.0);
/// assert_eq!(ticks[2].label, None);
/// assert_eq!(ticks[4].label.as_deref(), Some("4"));
/// ```
pub fn render_scale(domain: &ValueDomain, options: ScaleOptions) -> Vec<Tick> {
    if !options.scale {
        return Vec::new();
    }
    let last = domain.last_index();
    let pct = 100.0 / last as f32;
    domain
        .values()
        .iter()
        .enumerate()
        .map(|(i, value)| Tick {
            width_percent: if i == last { 0.0 } else { pct },
            label: (options.labels || i == 0 || i == last).then(|| value.to_string()),
        })
        .collect()
}
