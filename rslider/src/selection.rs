//! The selected index pair and its ordering rules.
//!
//! ## Usage
//!
//! Every mutation goes through [`SelectionState`], which clamps both indices
//! into the domain and, in range mode, re-sorts them so `start <= end` holds
//! after each call.

use tracing::debug;

use crate::{
    domain::ValueDomain,
    value::{DomainValue, SliderValue},
};

/// One endpoint of the selection, and the handle bound to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    /// The low endpoint (the only handle in single mode).
    Start,
    /// The high endpoint; range mode only.
    End,
}

impl Handle {
    /// The opposite endpoint.
    pub fn other(self) -> Self {
        match self {
            Handle::Start => Handle::End,
            Handle::End => Handle::Start,
        }
    }
}

/// Current `(start, end)` index pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    start: usize,
    end: usize,
    last: usize,
    range: bool,
}

impl SelectionState {
    /// Default selection: the whole domain in range mode, the first value in
    /// single mode.
    pub fn new(domain: &ValueDomain, range: bool) -> Self {
        Self {
            start: 0,
            end: if range { domain.last_index() } else { 0 },
            last: domain.last_index(),
            range,
        }
    }

    /// Default selection with the requested initial values applied.
    ///
    /// Values missing from the domain leave their slot at its default.
    pub fn initial(domain: &ValueDomain, range: bool, set: &[DomainValue]) -> Self {
        let mut state = Self::new(domain, range);
        state.apply_values(domain, set);
        state
    }

    /// Low index.
    pub fn start(&self) -> usize {
        self.start
    }

    /// High index; the authoritative index in single mode.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Index bound to `handle`.
    pub fn index(&self, handle: Handle) -> usize {
        match handle {
            Handle::Start => self.start,
            Handle::End => self.end,
        }
    }

    /// Whether both endpoints are independently selectable.
    pub fn is_range(&self) -> bool {
        self.range
    }

    /// Writes `index` into the slot of the dragged `handle`, then re-sorts.
    ///
    /// A handle dragged past the other one keeps writing its own slot; the
    /// pair is re-sorted after each move. Returns whether the selection
    /// changed.
    pub fn set_from_drag(&mut self, handle: Handle, index: usize) -> bool {
        let before = *self;
        let index = index.min(self.last);
        match handle {
            _ if !self.range => self.end = index,
            Handle::Start => self.start = index,
            Handle::End => self.end = index,
        }
        self.normalize();
        *self != before
    }

    /// Moves whichever endpoint is closer to `index`; ties move `start`.
    pub fn set_from_jump(&mut self, index: usize) -> Handle {
        if !self.range {
            self.end = index;
            self.normalize();
            return Handle::Start;
        }
        let to_start = index.abs_diff(self.start);
        let to_end = index.abs_diff(self.end);
        let handle = if to_start <= to_end {
            Handle::Start
        } else {
            Handle::End
        };
        self.set_from_drag(handle, index);
        handle
    }

    /// Re-selects by value. In range mode the first value targets `start`
    /// and the second `end`; in single mode only the first is used.
    ///
    /// Values missing from the domain are skipped. Returns whether the
    /// selection changed.
    pub fn set_programmatic(&mut self, domain: &ValueDomain, values: &[DomainValue]) -> bool {
        let before = *self;
        self.apply_values(domain, values);
        *self != before
    }

    /// Resolves the selection to domain values.
    pub fn resolve(&self, domain: &ValueDomain) -> SliderValue {
        if self.range {
            SliderValue::Range(domain.get(self.start).clone(), domain.get(self.end).clone())
        } else {
            SliderValue::Single(domain.get(self.end).clone())
        }
    }

    fn apply_values(&mut self, domain: &ValueDomain, values: &[DomainValue]) {
        let slots: &[Handle] = if self.range {
            &[Handle::Start, Handle::End]
        } else {
            &[Handle::End]
        };
        for (handle, value) in slots.iter().zip(values) {
            match domain.index_of(value) {
                Some(index) => match handle {
                    Handle::Start => self.start = index,
                    Handle::End => self.end = index,
                },
                None => debug!(%value, ?handle, "value not in domain, keeping current selection"),
            }
        }
        self.normalize();
    }

    fn normalize(&mut self) {
        self.start = self.start.min(self.last);
        self.end = self.end.min(self.last);
        if !self.range {
            self.start = self.end;
        } else if self.start > self.end {
            std::mem::swap(&mut self.start, &mut self.end);
        }
    }
}
