//! Construction errors.
//!
//! Both variants of [`SliderError`] are fatal: construction aborts and
//! nothing is attached to the host. Values that do not match the domain on
//! initial or programmatic selection are not errors at all; they are
//! skipped and logged at debug level.

use thiserror::Error;

/// Reasons a value domain cannot be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// An explicit list held fewer than two values.
    #[error("a value list needs at least 2 entries, got {0}")]
    TooFewValues(usize),
    /// An explicit list held a NaN or infinite number.
    #[error("value list entry {index} is not a finite number")]
    NonFiniteValue {
        /// Position of the offending entry.
        index: usize,
    },
    /// Bounds and step would generate more values than the slider accepts.
    #[error(
        "bounds and step give {0} values, above the limit of {max}",
        max = crate::domain::MAX_BOUNDED_VALUES
    )]
    TooManyValues(f64),
    /// `min` or `max` is NaN or infinite.
    #[error("min/max must be finite numbers")]
    NonFiniteBounds,
    /// `min` is not strictly below `max`.
    #[error("min ({min}) must be lower than max ({max})")]
    EmptyBounds {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
}

/// Errors returned when constructing a [`crate::Slider`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    /// The host reference could not be resolved.
    #[error("target element not found: {0}")]
    TargetNotFound(String),
    /// The configured values do not form a usable domain.
    #[error("invalid value domain: {0}")]
    InvalidDomain(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_convert_into_slider_errors() {
        let err: SliderError = DomainError::TooFewValues(1).into();
        assert_eq!(err, SliderError::InvalidDomain(DomainError::TooFewValues(1)));
        assert_eq!(
            err.to_string(),
            "invalid value domain: a value list needs at least 2 entries, got 1"
        );
    }

    #[test]
    fn target_not_found_names_the_target() {
        let err = SliderError::TargetNotFound("#price".into());
        assert_eq!(err.to_string(), "target element not found: #price");
    }
}
