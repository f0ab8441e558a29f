//! Domain values and their serialized form.
//!
//! A slider selects among [`DomainValue`]s. The resolved selection is a
//! [`SliderValue`], whose `Display` output is what lands in the host's value
//! slot and what change notifications carry: the bare value in single mode,
//! `low,high` in range mode.

use std::fmt;

/// Separator between the low and high value of a serialized range.
pub const VALUE_DELIMITER: char = ',';

/// One selectable entry of a value domain.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainValue {
    /// A numeric step.
    Number(f64),
    /// A labeled step; its position in the domain is its order.
    Label(String),
}

impl DomainValue {
    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DomainValue::Number(n) => Some(*n),
            DomainValue::Label(_) => None,
        }
    }
}

impl fmt::Display for DomainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // -0 prints as 0 so the host slot never shows a signed zero
            DomainValue::Number(n) if *n == 0.0 => f.write_str("0"),
            DomainValue::Number(n) if uses_exponent(*n) => {
                let text = format!("{n:e}");
                match text.split_once('e') {
                    Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                        write!(f, "{mantissa}e+{exponent}")
                    }
                    _ => f.write_str(&text),
                }
            }
            DomainValue::Number(n) => write!(f, "{n}"),
            DomainValue::Label(label) => f.write_str(label),
        }
    }
}

/// Magnitudes outside `[1e-6, 1e21)` print in exponent form, as form
/// fields expect.
fn uses_exponent(n: f64) -> bool {
    let magnitude = n.abs();
    magnitude.is_finite() && (magnitude >= 1e21 || magnitude < 1e-6)
}

impl From<f64> for DomainValue {
    fn from(value: f64) -> Self {
        DomainValue::Number(value)
    }
}

impl From<i32> for DomainValue {
    fn from(value: i32) -> Self {
        DomainValue::Number(f64::from(value))
    }
}

impl From<&str> for DomainValue {
    fn from(value: &str) -> Self {
        DomainValue::Label(value.to_owned())
    }
}

impl From<String> for DomainValue {
    fn from(value: String) -> Self {
        DomainValue::Label(value)
    }
}

/// The resolved selection, as reported to hosts and change handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderValue {
    /// Single-point mode: the selected value.
    Single(DomainValue),
    /// Range mode: the low and high values, in that order.
    Range(DomainValue, DomainValue),
}

impl SliderValue {
    /// Returns the low value (the only value in single mode).
    pub fn low(&self) -> &DomainValue {
        match self {
            SliderValue::Single(value) | SliderValue::Range(value, _) => value,
        }
    }

    /// Returns the high value (the only value in single mode).
    pub fn high(&self) -> &DomainValue {
        match self {
            SliderValue::Single(value) | SliderValue::Range(_, value) => value,
        }
    }

    /// Returns whether this value came from a range-mode slider.
    pub fn is_range(&self) -> bool {
        matches!(self, SliderValue::Range(..))
    }
}

impl fmt::Display for SliderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliderValue::Single(value) => write!(f, "{value}"),
            SliderValue::Range(low, high) => write!(f, "{low}{VALUE_DELIMITER}{high}"),
        }
    }
}
