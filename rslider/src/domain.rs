//! The finite, ordered sequence of selectable values.
//!
//! ## Usage
//!
//! Build a [`ValueDomain`] once from a [`DomainSource`]; every other part of
//! the slider works in indices into it.

use tracing::trace;

use crate::{error::DomainError, value::DomainValue};

const DEFAULT_STEP: f64 = 1.0;

/// Upper limit on the number of values a bounds source may generate.
pub const MAX_BOUNDED_VALUES: usize = 1 << 20;

/// Where the domain values come from.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainSource {
    /// An explicit list, used in the given order.
    List(Vec<DomainValue>),
    /// Evenly spaced numbers from `min`, `step` apart, not exceeding `max`.
    Bounds {
        /// First value of the domain.
        min: f64,
        /// Upper limit; included only when it lies on a step.
        max: f64,
    },
}

impl From<Vec<DomainValue>> for DomainSource {
    fn from(values: Vec<DomainValue>) -> Self {
        DomainSource::List(values)
    }
}

impl From<std::ops::RangeInclusive<f64>> for DomainSource {
    fn from(range: std::ops::RangeInclusive<f64>) -> Self {
        DomainSource::Bounds {
            min: *range.start(),
            max: *range.end(),
        }
    }
}

/// An ordered, immutable sequence of at least two values.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueDomain {
    values: Vec<DomainValue>,
}

impl ValueDomain {
    /// Builds a domain from a source. `step` only applies to
    /// [`DomainSource::Bounds`].
    pub fn from_source(source: &DomainSource, step: Option<f64>) -> Result<Self, DomainError> {
        match source {
            DomainSource::List(values) => Self::from_list(values.clone()),
            DomainSource::Bounds { min, max } => Self::from_bounds(*min, *max, step),
        }
    }

    /// Builds a domain from an explicit list.
    pub fn from_list(values: Vec<DomainValue>) -> Result<Self, DomainError> {
        if values.len() < 2 {
            return Err(DomainError::TooFewValues(values.len()));
        }
        if let Some(index) = values
            .iter()
            .position(|v| v.as_number().is_some_and(|n| !n.is_finite()))
        {
            return Err(DomainError::NonFiniteValue { index });
        }
        Ok(Self { values })
    }

    /// Builds `min, min + step, ...` up to the last value not above `max`.
    ///
    /// A missing, zero, negative or non-finite step falls back to 1.
    ///
    /// ```
    /// use rslider::domain::ValueDomain;
    ///
    /// let domain = ValueDomain::from_bounds(0.0, 10.0, Some(3.0)).unwrap();
    /// assert_eq!(domain.len(), 4);
    /// assert_eq!(domain.last().to_string(), "9");
    /// ```
    pub fn from_bounds(min: f64, max: f64, step: Option<f64>) -> Result<Self, DomainError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(DomainError::NonFiniteBounds);
        }
        if min >= max {
            return Err(DomainError::EmptyBounds { min, max });
        }
        let step = step
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(DEFAULT_STEP);
        let count = ((max - min) / step).floor() + 1.0;
        if count > MAX_BOUNDED_VALUES as f64 {
            return Err(DomainError::TooManyValues(count));
        }
        let len = count as usize;
        trace!(min, max, step, len, "building bounded value domain");
        let values = (0..len)
            .map(|i| DomainValue::Number(min + i as f64 * step))
            .collect::<Vec<_>>();
        // A step wider than the whole span leaves a single value.
        if values.len() < 2 {
            return Err(DomainError::TooFewValues(values.len()));
        }
        Ok(Self { values })
    }

    /// Number of values; always at least 2.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a built domain.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Highest valid index.
    pub fn last_index(&self) -> usize {
        self.values.len() - 1
    }

    /// Returns the value at `index`, clamped into the domain.
    pub fn get(&self, index: usize) -> &DomainValue {
        &self.values[index.min(self.last_index())]
    }

    /// Returns the first value.
    pub fn first(&self) -> &DomainValue {
        &self.values[0]
    }

    /// Returns the last value.
    pub fn last(&self) -> &DomainValue {
        &self.values[self.last_index()]
    }

    /// All values in order.
    pub fn values(&self) -> &[DomainValue] {
        &self.values
    }

    /// Locates a value by exact match.
    pub fn index_of(&self, value: &DomainValue) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    /// Clamps an index into `[0, len - 1]`.
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.last_index())
    }
}
