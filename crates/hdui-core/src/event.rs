#![forbid(unsafe_code)]

//! Canonical input events for scroll containers.
//!
//! Lengths are `f64` in the same unit as the list's item height (cells for
//! terminal hosts, CSS pixels for browser hosts).

/// An input event delivered to a scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Scroll position change.
    Scroll(ScrollEvent),

    /// Touch or drag pan gesture.
    Pan(PanEvent),

    /// Container was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Navigation key.
    Key(KeyCode),
}

/// How the scroll position changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollEvent {
    /// Relative movement (wheel, trackpad). Positive scrolls toward the end.
    By(f64),
    /// Absolute position reported by the host container.
    To(f64),
}

impl ScrollEvent {
    /// Resolve against the current position.
    #[must_use]
    pub fn apply(self, current: f64) -> f64 {
        match self {
            Self::By(delta) => current + delta,
            Self::To(top) => top,
        }
    }
}

/// Phase of a pan gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanPhase {
    Start,
    Move,
    End,
}

/// A pan gesture sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanEvent {
    pub phase: PanPhase,
    /// Total vertical displacement since the pan started.
    pub offset_y: f64,
    /// Vertical displacement since the previous sample.
    pub delta_y: f64,
}

impl PanEvent {
    #[must_use]
    pub const fn start() -> Self {
        Self {
            phase: PanPhase::Start,
            offset_y: 0.0,
            delta_y: 0.0,
        }
    }

    #[must_use]
    pub const fn moved(offset_y: f64, delta_y: f64) -> Self {
        Self {
            phase: PanPhase::Move,
            offset_y,
            delta_y,
        }
    }

    #[must_use]
    pub const fn end(offset_y: f64) -> Self {
        Self {
            phase: PanPhase::End,
            offset_y,
            delta_y: 0.0,
        }
    }
}

/// Navigation keys understood by list widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_event_apply() {
        assert_eq!(ScrollEvent::By(3.0).apply(10.0), 13.0);
        assert_eq!(ScrollEvent::By(-30.0).apply(10.0), -20.0);
        assert_eq!(ScrollEvent::To(4.0).apply(10.0), 4.0);
    }
}
