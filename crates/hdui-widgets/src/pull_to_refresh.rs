#![forbid(unsafe_code)]

//! Pull-to-refresh gesture state machine.
//!
//! A pull only starts when the list is scrolled to the very top. Downward pan
//! movement stretches the pull up to `1.5 * threshold`; once the pull reaches
//! `threshold` the gesture is armed, and releasing an armed gesture emits a
//! [`RefreshRequest`]. The refresh itself is the caller's work: call
//! [`PullToRefresh::set_refreshing`] while it runs so the indicator shows it
//! and further releases are ignored.
//!
//! # Invariants
//!
//! 1. `0 <= pull <= 1.5 * threshold`.
//! 2. `armed` implies `pull >= threshold`.
//! 3. At most one [`RefreshRequest`] per release, and none while refreshing.
//! 4. After [`PullToRefresh::pan_end`] the pull is zero and the gesture is idle.

use crate::{Widget, draw_centered};
use hdui_core::event::{PanEvent, PanPhase};
use hdui_core::geometry::Rect;
use hdui_render::cell::CellAttrs;
use hdui_render::frame::Frame;

/// Pull distance that arms a refresh.
pub const DEFAULT_PULL_THRESHOLD: f64 = 80.0;

/// Maximum pull as a multiple of the threshold.
const MAX_PULL_FACTOR: f64 = 1.5;

/// Emitted when an armed pull is released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefreshRequest {
    /// Pull distance at release.
    pub pull: f64,
}

/// Visible state of the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullPhase {
    Idle,
    /// Pulling, not yet past the threshold.
    Pulling,
    /// Past the threshold; releasing refreshes.
    Armed,
    /// Caller reported a refresh in flight.
    Refreshing,
}

impl PullPhase {
    /// Indicator label, if any.
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Pulling => Some("Pull to refresh"),
            Self::Armed => Some("Release to refresh"),
            Self::Refreshing => Some("Refreshing..."),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PullToRefresh {
    threshold: f64,
    pulling: bool,
    pull: f64,
    armed: bool,
    refreshing: bool,
}

impl Default for PullToRefresh {
    fn default() -> Self {
        Self::new()
    }
}

impl PullToRefresh {
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_PULL_THRESHOLD,
            pulling: false,
            pull: 0.0,
            armed: false,
            refreshing: false,
        }
    }

    /// Pull distance that arms a refresh. Non-positive or non-finite values
    /// keep the default.
    #[must_use]
    pub fn threshold(mut self, threshold: f64) -> Self {
        if threshold.is_finite() && threshold > 0.0 {
            self.threshold = threshold;
        }
        self
    }

    #[must_use]
    pub fn threshold_value(&self) -> f64 {
        self.threshold
    }

    /// Current pull distance.
    #[must_use]
    pub fn pull(&self) -> f64 {
        self.pull
    }

    #[must_use]
    pub fn is_pulling(&self) -> bool {
        self.pulling
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// `pull / threshold`, clamped to `[0, 1]`. Drives indicator fade-in.
    #[must_use]
    pub fn progress(&self) -> f64 {
        (self.pull / self.threshold).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn phase(&self) -> PullPhase {
        if self.refreshing {
            PullPhase::Refreshing
        } else if self.armed {
            PullPhase::Armed
        } else if self.pulling {
            PullPhase::Pulling
        } else {
            PullPhase::Idle
        }
    }

    /// Report whether the caller's refresh is running.
    pub fn set_refreshing(&mut self, refreshing: bool) {
        self.refreshing = refreshing;
    }

    /// Pan began. Only a list at the very top starts a pull.
    pub fn pan_start(&mut self, scroll_top: f64) {
        self.pulling = scroll_top == 0.0;
    }

    /// Pan moved by `delta_y`, `offset_y` from where it started. Upward
    /// movement is ignored.
    pub fn pan(&mut self, offset_y: f64, delta_y: f64) {
        if !self.pulling || delta_y < 0.0 || !offset_y.is_finite() {
            return;
        }
        self.pull = offset_y.clamp(0.0, self.threshold * MAX_PULL_FACTOR);
        self.armed = self.pull >= self.threshold;
    }

    /// Pan released. Returns a request if the pull was armed and no refresh
    /// is running; the pull resets either way.
    pub fn pan_end(&mut self) -> Option<RefreshRequest> {
        if !self.pulling {
            return None;
        }
        let request = (self.armed && !self.refreshing).then_some(RefreshRequest { pull: self.pull });
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "pull_to_refresh.release",
            pull = self.pull,
            armed = self.armed,
            refreshing = self.refreshing,
            requested = request.is_some()
        );
        self.pulling = false;
        self.armed = false;
        self.pull = 0.0;
        request
    }

    /// Dispatch a pan event. `scroll_top` is only read on [`PanPhase::Start`].
    pub fn handle_pan(&mut self, event: &PanEvent, scroll_top: f64) -> Option<RefreshRequest> {
        match event.phase {
            PanPhase::Start => {
                self.pan_start(scroll_top);
                None
            }
            PanPhase::Move => {
                self.pan(event.offset_y, event.delta_y);
                None
            }
            PanPhase::End => self.pan_end(),
        }
    }

    /// Indicator widget for the current state.
    #[must_use]
    pub fn indicator(&self) -> PullIndicator {
        PullIndicator {
            phase: self.phase(),
        }
    }
}

/// One-row status line shown above the list while pulling or refreshing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullIndicator {
    phase: PullPhase,
}

impl PullIndicator {
    #[must_use]
    pub fn phase(&self) -> PullPhase {
        self.phase
    }
}

impl Widget for PullIndicator {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let Some(label) = self.phase.label() else {
            return;
        };
        let attrs = match self.phase {
            PullPhase::Armed => CellAttrs::BOLD,
            PullPhase::Refreshing => CellAttrs::REVERSE,
            _ => CellAttrs::DIM,
        };
        draw_centered(frame, area, label, attrs);
    }
}
