//! Parsers for the `data-*` attribute formats.

use rslider::{DomainSource, DomainValue, InitialSet, VALUE_DELIMITER};

/// Separates list entries in `data-values` and `data-set`.
pub const LIST_DELIMITER: char = '|';
/// Separates `min` and `max` in a bounds form of `data-values`.
pub const BOUNDS_DELIMITER: char = '-';

/// Parses `data-values`.
///
/// Input containing `-` gives bounds from its first two `-`-separated
/// parts, with an empty part read as 0. Anything else is a `|`-separated
/// list whose numeric entries become numbers and the rest labels.
/// Unparsable bounds come back as NaN and are rejected when the slider is
/// built.
///
/// ```
/// use rslider::{DomainSource, DomainValue};
/// use rslider_host::parse_values;
///
/// assert_eq!(parse_values("0-100"), DomainSource::Bounds { min: 0.0, max: 100.0 });
/// assert_eq!(
///     parse_values("S|2|L"),
///     DomainSource::List(vec![DomainValue::from("S"), DomainValue::from(2), DomainValue::from("L")])
/// );
/// ```
pub fn parse_values(raw: &str) -> DomainSource {
    if raw.contains(BOUNDS_DELIMITER) {
        let mut parts = raw.split(BOUNDS_DELIMITER).map(attribute_number);
        return DomainSource::Bounds {
            min: parts.next().unwrap_or(f64::NAN),
            max: parts.next().unwrap_or(f64::NAN),
        };
    }
    raw.split(LIST_DELIMITER)
        .map(|entry| match entry.trim().parse::<f64>() {
            Ok(number) if !number.is_nan() => DomainValue::Number(number),
            _ => DomainValue::Label(entry.to_owned()),
        })
        .collect::<Vec<_>>()
        .into()
}

/// Parses `data-set` into numeric values.
///
/// An empty attribute selects nothing. Empty entries read as 0; entries
/// that are not numbers cannot match anything and are dropped.
pub fn parse_set(raw: &str) -> InitialSet {
    if raw.is_empty() {
        return InitialSet::new();
    }
    raw.split(LIST_DELIMITER)
        .map(attribute_number)
        .filter(|number| number.is_finite())
        .map(DomainValue::Number)
        .collect()
}

/// Parses a serialized slider value into its numbers, dropping entries
/// that are not finite numbers.
pub fn parse_number_string(raw: &str) -> Vec<f64> {
    raw.split(VALUE_DELIMITER)
        .filter_map(|entry| entry.trim().parse::<f64>().ok())
        .filter(|number| number.is_finite())
        .collect()
}

/// Reads one numeric attribute part: blank is 0, garbage is NaN.
fn attribute_number(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    raw.parse().unwrap_or(f64::NAN)
}
