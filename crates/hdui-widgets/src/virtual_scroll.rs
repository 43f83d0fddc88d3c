#![forbid(unsafe_code)]

//! Headless scroll state for callers that own their scroll container.
//!
//! [`VirtualScroll`] derives the same window as
//! [`VirtualizedList`](crate::virtualized::VirtualizedList) but draws nothing.
//! Use it to drive a host-managed container, e.g. jumping to a message in a
//! chat thread or to a post in a feed.
//!
//! ```
//! use hdui_widgets::virtual_scroll::{Align, VirtualScroll};
//!
//! let mut scroll = VirtualScroll::new(1000, 50.0, 500.0)?;
//! assert_eq!(scroll.scroll_to_index(20), 1000.0);
//! assert_eq!(scroll.visible_range().start(), 20);
//! assert_eq!(scroll.scroll_to_index_aligned(20, Align::Center), Some(775.0));
//! assert_eq!(scroll.total_height(), 50_000.0);
//! # Ok::<(), hdui_widgets::window::WindowError>(())
//! ```

use std::time::Duration;

use crate::window::{
    VisibleRange, WindowError, WindowLayout, WindowMetrics, compute_window, item_offset,
    max_scroll_top, sanitize_scroll_top,
};
use web_time::Instant;

/// How long after the last scroll the container still counts as scrolling.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_millis(150);

/// Where a scrolled-to item should land in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Item top at viewport top.
    #[default]
    Start,
    /// Item centered in the viewport.
    Center,
    /// Item bottom at viewport bottom.
    End,
}

/// Scroll offset plus derived window for a uniform-height list.
#[derive(Debug, Clone)]
pub struct VirtualScroll {
    len: usize,
    metrics: WindowMetrics,
    scroll_top: f64,
    last_scroll: Option<Instant>,
    idle_timeout: Duration,
}

impl VirtualScroll {
    /// Create scroll state at offset 0 with no overscan.
    pub fn new(len: usize, item_height: f64, container_height: f64) -> Result<Self, WindowError> {
        let metrics = WindowMetrics::new(item_height, container_height).with_overscan(0);
        metrics.validate()?;
        Ok(Self {
            len,
            metrics,
            scroll_top: 0.0,
            last_scroll: None,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        })
    }

    #[must_use]
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.metrics.overscan = overscan;
        self
    }

    #[must_use]
    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    #[must_use]
    pub fn metrics(&self) -> &WindowMetrics {
        &self.metrics
    }

    /// `len * item_height`.
    #[must_use]
    pub fn total_height(&self) -> f64 {
        item_offset(self.len, self.metrics.item_height)
    }

    /// Window for the current offset.
    #[must_use]
    pub fn layout(&self) -> WindowLayout {
        // Metrics are validated on every write, so this cannot fail.
        compute_window(self.len, &self.metrics, self.scroll_top)
            .unwrap_or_else(|_| WindowLayout::empty(self.metrics.item_height))
    }

    #[must_use]
    pub fn visible_range(&self) -> VisibleRange {
        self.layout().range
    }

    /// Record a host-reported offset. Returns `true` if it changed.
    pub fn set_scroll_top(&mut self, top: f64) -> bool {
        self.set_scroll_top_at(top, Instant::now())
    }

    /// [`set_scroll_top`](Self::set_scroll_top) with an explicit timestamp.
    pub fn set_scroll_top_at(&mut self, top: f64, now: Instant) -> bool {
        let top = sanitize_scroll_top(top);
        if top == self.scroll_top {
            return false;
        }
        self.scroll_top = top;
        self.last_scroll = Some(now);
        true
    }

    /// Jump so `index` is at the top: `index * item_height`, clamped to
    /// `[0, (len - 1) * item_height]`. Returns the new offset.
    pub fn scroll_to_index(&mut self, index: usize) -> f64 {
        let target = item_offset(index, self.metrics.item_height).min(self.max_scroll_top());
        self.set_scroll_top(target);
        self.scroll_top
    }

    /// Jump to `index` with the given alignment.
    ///
    /// Returns `None` (leaving the offset untouched) when `index` is out of
    /// range.
    pub fn scroll_to_index_aligned(&mut self, index: usize, align: Align) -> Option<f64> {
        if index >= self.len {
            return None;
        }
        let h = self.metrics.item_height;
        let ch = self.metrics.container_height;
        let offset = item_offset(index, h);
        let target = match align {
            Align::Start => offset,
            Align::Center => offset - (ch - h) / 2.0,
            Align::End => offset - ch + h,
        };
        self.set_scroll_top(target.min(self.max_scroll_top()));
        Some(self.scroll_top)
    }

    /// Jump to offset 0.
    pub fn scroll_to_top(&mut self) {
        self.set_scroll_top(0.0);
    }

    /// `(len - 1) * item_height`, or 0 for an empty list.
    #[must_use]
    pub fn max_scroll_top(&self) -> f64 {
        max_scroll_top(self.len, self.metrics.item_height)
    }

    /// Update the item count. A shrink clamps the offset to the new maximum.
    pub fn set_len(&mut self, len: usize) {
        let shrank = len < self.len;
        self.len = len;
        if shrank && self.scroll_top > self.max_scroll_top() {
            self.scroll_top = self.max_scroll_top();
        }
    }

    /// Update the container height (e.g. on resize).
    pub fn set_container_height(&mut self, container_height: f64) -> Result<(), WindowError> {
        let metrics = WindowMetrics {
            container_height,
            ..self.metrics
        };
        metrics.validate()?;
        self.metrics = metrics;
        Ok(())
    }

    /// Whether a scroll happened less than the idle timeout before `now`.
    #[must_use]
    pub fn is_scrolling(&self, now: Instant) -> bool {
        self.last_scroll
            .is_some_and(|at| now.saturating_duration_since(at) < self.idle_timeout)
    }
}
