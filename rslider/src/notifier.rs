//! Debounced change notification.
//!
//! ## Usage
//!
//! Call [`ChangeNotifier::schedule`] after each selection change and
//! [`ChangeNotifier::poll`] from the host's frame or timer loop. Only the
//! last value scheduled within a burst is delivered, once the window has
//! passed without further changes.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::{prop::CallbackWith, value::SliderValue};

/// Quiet period after the last change before the handler fires.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq)]
struct PendingChange {
    deadline: Instant,
    value: SliderValue,
}

/// Holds at most one pending notification.
#[derive(Debug)]
pub struct ChangeNotifier {
    window: Duration,
    callback: Option<CallbackWith<SliderValue>>,
    pending: Option<PendingChange>,
}

impl ChangeNotifier {
    /// Creates a notifier with the standard window.
    pub fn new(callback: Option<CallbackWith<SliderValue>>) -> Self {
        Self::with_window(callback, DEBOUNCE_WINDOW)
    }

    /// Creates a notifier with a custom window.
    pub fn with_window(callback: Option<CallbackWith<SliderValue>>, window: Duration) -> Self {
        Self {
            window,
            callback,
            pending: None,
        }
    }

    /// Replaces any pending notification with `value`, due one window after
    /// `now`.
    pub fn schedule(&mut self, value: SliderValue, now: Instant) {
        self.pending = Some(PendingChange {
            deadline: now + self.window,
            value,
        });
    }

    /// Fires the pending notification if its window has passed. Returns the
    /// delivered value.
    pub fn poll(&mut self, now: Instant) -> Option<SliderValue> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if !due {
            return None;
        }
        let PendingChange { value, .. } = self.pending.take()?;
        debug!(%value, "slider change settled");
        if let Some(callback) = &self.callback {
            callback.call(value.clone());
        }
        Some(value)
    }

    /// Drops the pending notification without firing it.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// When the pending notification is due, if one is pending.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl Recorder {
        fn callback(&self) -> CallbackWith<SliderValue> {
            let seen = Arc::clone(&self.0);
            CallbackWith::new(move |value: SliderValue| seen.lock().push(value.to_string()))
        }

        fn seen(&self) -> Vec<String> {
            self.0.lock().clone()
        }
    }

    fn single(n: i32) -> SliderValue {
        SliderValue::Single(n.into())
    }

    #[test]
    fn nothing_fires_before_a_change() {
        let recorder = Recorder::default();
        let mut notifier = ChangeNotifier::new(Some(recorder.callback()));
        let now = Instant::now();
        assert_eq!(notifier.poll(now + Duration::from_secs(5)), None);
        assert!(recorder.seen().is_empty());
    }

    #[test]
    fn burst_collapses_to_last_value() {
        let recorder = Recorder::default();
        let mut notifier = ChangeNotifier::new(Some(recorder.callback()));
        let t0 = Instant::now();

        for (i, ms) in [0u64, 50, 120, 250, 299].into_iter().enumerate() {
            let at = t0 + Duration::from_millis(ms);
            notifier.schedule(single(i as i32), at);
            assert_eq!(notifier.poll(at), None);
        }

        let last = t0 + Duration::from_millis(299);
        assert_eq!(notifier.poll(last + Duration::from_millis(299)), None);
        assert_eq!(notifier.poll(last + DEBOUNCE_WINDOW), Some(single(4)));
        assert_eq!(notifier.poll(last + Duration::from_secs(10)), None);
        assert_eq!(recorder.seen(), vec!["4".to_string()]);
    }

    #[test]
    fn cancel_prevents_delivery() {
        let recorder = Recorder::default();
        let mut notifier = ChangeNotifier::new(Some(recorder.callback()));
        let t0 = Instant::now();
        notifier.schedule(single(1), t0);
        assert_eq!(notifier.pending_deadline(), Some(t0 + DEBOUNCE_WINDOW));
        assert!(notifier.cancel());
        assert_eq!(notifier.poll(t0 + Duration::from_secs(1)), None);
        assert!(recorder.seen().is_empty());
        assert_eq!(notifier.pending_deadline(), None);
    }

    #[test]
    fn missing_callback_still_settles() {
        let mut notifier = ChangeNotifier::with_window(None, Duration::from_millis(10));
        let t0 = Instant::now();
        notifier.schedule(single(3), t0);
        assert_eq!(notifier.poll(t0 + Duration::from_millis(10)), Some(single(3)));
    }
}
