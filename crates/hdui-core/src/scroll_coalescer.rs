#![forbid(unsafe_code)]

//! Per-frame coalescing of scroll events.
//!
//! Hosts deliver scroll events far faster than a list needs to recompute its
//! window. [`ScrollCoalescer`] absorbs every scroll event that arrives between
//! two frames and hands back a single equivalent event on [`flush`], so the
//! visible range is recomputed at most once per frame.
//!
//! # Rules
//!
//! - `By(a)` then `By(b)` folds to `By(a + b)`.
//! - Any `To(t)` replaces whatever was pending (latest absolute wins).
//! - `To(t)` then `By(d)` folds to `To(t + d)`.
//! - Non-scroll events pass through immediately; flushing stays the caller's job.
//!
//! ```
//! use hdui_core::event::{Event, KeyCode, ScrollEvent};
//! use hdui_core::scroll_coalescer::ScrollCoalescer;
//!
//! let mut coalescer = ScrollCoalescer::new();
//! assert!(coalescer.push(Event::Scroll(ScrollEvent::By(3.0))).is_none());
//! assert!(coalescer.push(Event::Scroll(ScrollEvent::By(2.0))).is_none());
//! assert!(coalescer.push(Event::Key(KeyCode::Home)).is_some());
//!
//! assert_eq!(coalescer.flush(), Some(Event::Scroll(ScrollEvent::By(5.0))));
//! assert_eq!(coalescer.flush(), None);
//! ```
//!
//! [`flush`]: ScrollCoalescer::flush

use crate::event::{Event, ScrollEvent};

/// Folds bursts of scroll events into one event per frame.
///
/// Not thread-safe; owned by the single event-dispatch thread.
#[derive(Debug, Clone, Default)]
pub struct ScrollCoalescer {
    pending: Option<ScrollEvent>,
    absorbed: u32,
}

impl ScrollCoalescer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event.
    ///
    /// Returns `None` if the event was a scroll and is now pending, or
    /// `Some(event)` if it should be processed immediately.
    pub fn push(&mut self, event: Event) -> Option<Event> {
        match event {
            Event::Scroll(scroll) => {
                self.pending = Some(match (self.pending, scroll) {
                    (None, next) => next,
                    (Some(ScrollEvent::By(a)), ScrollEvent::By(b)) => ScrollEvent::By(a + b),
                    (Some(ScrollEvent::To(t)), ScrollEvent::By(d)) => ScrollEvent::To(t + d),
                    (Some(_), ScrollEvent::To(t)) => ScrollEvent::To(t),
                });
                self.absorbed = self.absorbed.saturating_add(1);
                None
            }
            other => Some(other),
        }
    }

    /// Number of raw scroll events folded into the pending one.
    #[must_use]
    pub fn pending_count(&self) -> u32 {
        self.absorbed
    }

    /// Whether a scroll is waiting for the next frame.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the coalesced scroll event, if any. Call once per frame.
    #[must_use]
    pub fn flush(&mut self) -> Option<Event> {
        let pending = self.pending.take()?;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "scroll.coalesce",
            absorbed = self.absorbed,
            event = ?pending
        );
        self.absorbed = 0;
        Some(Event::Scroll(pending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{KeyCode, PanEvent};
    use proptest::prelude::*;

    #[test]
    fn deltas_sum() {
        let mut c = ScrollCoalescer::new();
        for _ in 0..10 {
            assert!(c.push(Event::Scroll(ScrollEvent::By(1.5))).is_none());
        }
        assert_eq!(c.pending_count(), 10);
        assert_eq!(c.flush(), Some(Event::Scroll(ScrollEvent::By(15.0))));
        assert_eq!(c.pending_count(), 0);
    }

    #[test]
    fn absolute_wins_over_deltas() {
        let mut c = ScrollCoalescer::new();
        let _ = c.push(Event::Scroll(ScrollEvent::By(40.0)));
        let _ = c.push(Event::Scroll(ScrollEvent::To(100.0)));
        assert_eq!(c.flush(), Some(Event::Scroll(ScrollEvent::To(100.0))));
    }

    #[test]
    fn delta_after_absolute_offsets_it() {
        let mut c = ScrollCoalescer::new();
        let _ = c.push(Event::Scroll(ScrollEvent::To(100.0)));
        let _ = c.push(Event::Scroll(ScrollEvent::By(-25.0)));
        assert_eq!(c.flush(), Some(Event::Scroll(ScrollEvent::To(75.0))));
    }

    #[test]
    fn other_events_pass_through_without_flushing() {
        let mut c = ScrollCoalescer::new();
        let _ = c.push(Event::Scroll(ScrollEvent::By(1.0)));
        let pan = Event::Pan(PanEvent::start());
        assert_eq!(c.push(pan), Some(pan));
        assert_eq!(c.push(Event::Key(KeyCode::End)), Some(Event::Key(KeyCode::End)));
        assert!(c.has_pending());
    }

    proptest! {
        #[test]
        fn coalesced_equals_sequential(ops in proptest::collection::vec(
            prop_oneof![
                (-100i32..100).prop_map(|d| ScrollEvent::By(f64::from(d))),
                (0i32..5000).prop_map(|t| ScrollEvent::To(f64::from(t))),
            ],
            1..50,
        )) {
            let start = 37.0;
            let sequential = ops.iter().fold(start, |top, ev| ev.apply(top));

            let mut c = ScrollCoalescer::new();
            for ev in &ops {
                prop_assert!(c.push(Event::Scroll(*ev)).is_none());
            }
            let Some(Event::Scroll(folded)) = c.flush() else {
                return Err(TestCaseError::fail("expected a pending scroll"));
            };
            prop_assert_eq!(folded.apply(start), sequential);
        }
    }
}
