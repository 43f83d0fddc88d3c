#![forbid(unsafe_code)]

//! Visible-window computation for uniform-height lists.
//!
//! Given an item count, a uniform item height, the container height, an
//! overscan margin and the current scroll offset, [`compute_window`] returns
//! the contiguous inclusive index range that must be mounted, the total
//! virtual height of the list (the spacer), and the single translation that
//! places the mounted window at its true position.
//!
//! ```text
//! visible_start = floor(scroll_top / item_height)
//! visible_end   = min(visible_start + ceil(container_height / item_height), len - 1)
//! start         = max(0, visible_start - overscan)
//! end           = min(len - 1, visible_end + overscan)
//! ```
//!
//! Work is O(1): arithmetic only, the items themselves are never scanned.
//!
//! # Invariants
//!
//! 1. `start <= end < len` whenever `len > 0`.
//! 2. `end - start + 1 <= ceil(container_height / item_height) + 2 * overscan + 1`.
//! 3. `total_height == len * item_height`, independent of scroll and overscan.
//! 4. `offset == start * item_height`.
//! 5. Pure: identical inputs give identical output.
//!
//! ```
//! use hdui_widgets::window::{WindowMetrics, compute_window};
//!
//! let metrics = WindowMetrics::new(50.0, 500.0).with_overscan(5);
//! let layout = compute_window(1000, &metrics, 1000.0).unwrap();
//! assert_eq!((layout.range.start(), layout.range.end()), (15, 35));
//! assert_eq!(layout.total_height, 50_000.0);
//! assert_eq!(layout.offset, 750.0);
//! ```

use std::fmt;
use std::ops::Range;

/// Overscan applied when none is configured.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Inclusive range of mounted item indices.
///
/// [`VisibleRange::EMPTY`] is the sentinel for "nothing mounted"; it reports
/// `start() == end() == 0` and `len() == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VisibleRange {
    start: usize,
    end: usize,
    empty: bool,
}

impl VisibleRange {
    /// The empty window.
    pub const EMPTY: VisibleRange = VisibleRange {
        start: 0,
        end: 0,
        empty: true,
    };

    /// Inclusive range `[start, end]`. Callers guarantee `start <= end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            empty: false,
        }
    }

    /// First mounted index.
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Last mounted index (inclusive).
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.empty
    }

    /// Number of mounted items.
    #[inline]
    pub const fn len(&self) -> usize {
        if self.empty {
            0
        } else {
            self.end - self.start + 1
        }
    }

    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        !self.empty && index >= self.start && index <= self.end
    }

    /// Mounted indices as a half-open range, for slicing and iteration.
    #[inline]
    pub const fn indices(&self) -> Range<usize> {
        if self.empty {
            0..0
        } else {
            self.start..self.end + 1
        }
    }
}

/// Rejected window configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowError {
    /// Item height was zero or negative.
    NonPositiveItemHeight(f64),
    /// Container height was zero or negative.
    NonPositiveContainerHeight(f64),
    /// A length was NaN or infinite.
    NonFinite { field: &'static str },
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveItemHeight(h) => write!(f, "item height must be positive, got {h}"),
            Self::NonPositiveContainerHeight(h) => {
                write!(f, "container height must be positive, got {h}")
            }
            Self::NonFinite { field } => write!(f, "{field} must be finite"),
        }
    }
}

impl std::error::Error for WindowError {}

/// Window sizing inputs other than the scroll offset and item count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowMetrics {
    /// Uniform height of every item.
    pub item_height: f64,
    /// Visible height of the scroll container.
    pub container_height: f64,
    /// Extra items mounted on each side of the visible ones.
    pub overscan: usize,
}

impl WindowMetrics {
    /// Metrics with [`DEFAULT_OVERSCAN`].
    #[must_use]
    pub const fn new(item_height: f64, container_height: f64) -> Self {
        Self {
            item_height,
            container_height,
            overscan: DEFAULT_OVERSCAN,
        }
    }

    #[must_use]
    pub const fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Reject non-positive or non-finite heights.
    pub fn validate(&self) -> Result<(), WindowError> {
        if !self.item_height.is_finite() {
            return Err(WindowError::NonFinite {
                field: "item_height",
            });
        }
        if !self.container_height.is_finite() {
            return Err(WindowError::NonFinite {
                field: "container_height",
            });
        }
        if self.item_height <= 0.0 {
            return Err(WindowError::NonPositiveItemHeight(self.item_height));
        }
        if self.container_height <= 0.0 {
            return Err(WindowError::NonPositiveContainerHeight(
                self.container_height,
            ));
        }
        Ok(())
    }

    /// Items needed to cover the container: `ceil(container / item)`.
    #[must_use]
    pub fn items_per_viewport(&self) -> usize {
        to_index((self.container_height / self.item_height).ceil())
    }

    /// Upper bound on [`VisibleRange::len`] for these metrics.
    #[must_use]
    pub fn max_window_len(&self) -> usize {
        self.items_per_viewport()
            .saturating_add(self.overscan.saturating_mul(2))
            .saturating_add(1)
    }
}

/// Result of a window computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowLayout {
    /// Indices to mount.
    pub range: VisibleRange,
    /// Height of the full virtual list (`len * item_height`).
    pub total_height: f64,
    /// Translation of the mounted window (`start * item_height`).
    pub offset: f64,
    /// Uniform item height the layout was computed with.
    pub item_height: f64,
}

impl WindowLayout {
    /// Layout for an empty list.
    #[must_use]
    pub const fn empty(item_height: f64) -> Self {
        Self {
            range: VisibleRange::EMPTY,
            total_height: 0.0,
            offset: 0.0,
            item_height,
        }
    }

    /// Absolute top of a mounted item, measured from the top of the spacer.
    #[must_use]
    pub fn item_top(&self, index: usize) -> Option<f64> {
        self.range
            .contains(index)
            .then(|| self.offset + (index - self.range.start()) as f64 * self.item_height)
    }
}

/// Absolute offset of `index` from the top of the list.
#[inline]
#[must_use]
pub fn item_offset(index: usize, item_height: f64) -> f64 {
    index as f64 * item_height
}

/// Largest scroll offset that still shows an item: `(len - 1) * item_height`.
#[inline]
#[must_use]
pub fn max_scroll_top(len: usize, item_height: f64) -> f64 {
    item_offset(len.saturating_sub(1), item_height)
}

/// Negative and non-finite offsets collapse to the top.
#[inline]
pub(crate) fn sanitize_scroll_top(scroll_top: f64) -> f64 {
    if scroll_top.is_finite() && scroll_top > 0.0 {
        scroll_top
    } else {
        0.0
    }
}

/// Non-negative float to index. Float-to-int `as` saturates, so huge values
/// map to `usize::MAX` instead of wrapping.
#[inline]
fn to_index(value: f64) -> usize {
    value as usize
}

/// Compute the mounted window.
///
/// An empty list yields [`VisibleRange::EMPTY`] with a zero spacer. A scroll
/// offset beyond the content clamps the window to the last index.
pub fn compute_window(
    len: usize,
    metrics: &WindowMetrics,
    scroll_top: f64,
) -> Result<WindowLayout, WindowError> {
    metrics.validate()?;
    let h = metrics.item_height;
    if len == 0 {
        return Ok(WindowLayout::empty(h));
    }

    let last = len - 1;
    let top = sanitize_scroll_top(scroll_top);
    let visible_start = to_index((top / h).floor()).min(last);
    let visible_end = visible_start
        .saturating_add(metrics.items_per_viewport())
        .min(last);

    let start = visible_start.saturating_sub(metrics.overscan);
    let end = visible_end.saturating_add(metrics.overscan).min(last);

    Ok(WindowLayout {
        range: VisibleRange::new(start, end),
        total_height: item_offset(len, h),
        offset: item_offset(start, h),
        item_height: h,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(len: usize, h: f64, ch: f64, overscan: usize, top: f64) -> (usize, usize) {
        let layout = compute_window(len, &WindowMetrics::new(h, ch).with_overscan(overscan), top)
            .expect("valid metrics");
        (layout.range.start(), layout.range.end())
    }

    #[test]
    fn worked_example() {
        let metrics = WindowMetrics::new(50.0, 500.0).with_overscan(5);
        let layout = compute_window(1000, &metrics, 1000.0).unwrap();
        assert_eq!(layout.range, VisibleRange::new(15, 35));
        assert_eq!(layout.range.len(), 21);
        assert_eq!(layout.total_height, 50_000.0);
        assert_eq!(layout.offset, 750.0);
        assert_eq!(layout.item_top(20), Some(1000.0));
        assert_eq!(layout.item_top(36), None);
    }

    #[test]
    fn without_overscan_matches_visible_rows() {
        assert_eq!(range(1000, 50.0, 500.0, 0, 1000.0), (20, 30));
    }

    #[test]
    fn empty_list_is_empty_window() {
        let layout = compute_window(0, &WindowMetrics::new(10.0, 100.0), 500.0).unwrap();
        assert!(layout.range.is_empty());
        assert_eq!(layout.range.start(), 0);
        assert_eq!(layout.range.end(), 0);
        assert_eq!(layout.range.len(), 0);
        assert_eq!(layout.range.indices(), 0..0);
        assert_eq!(layout.total_height, 0.0);
        assert_eq!(layout.offset, 0.0);
    }

    #[test]
    fn top_of_list_starts_at_zero() {
        assert_eq!(range(100, 20.0, 100.0, 5, 0.0).0, 0);
    }

    #[test]
    fn bottom_of_list_ends_at_last() {
        let (start, end) = range(100, 20.0, 100.0, 5, 99.0 * 20.0);
        assert_eq!(end, 99);
        assert_eq!(start, 94);
    }

    #[test]
    fn scroll_past_content_clamps_to_last() {
        // List shrank from 1000 to 10 items without correcting scroll_top.
        let (start, end) = range(10, 50.0, 500.0, 2, 40_000.0);
        assert_eq!(end, 9);
        assert!(start <= end);
        assert_eq!(start, 7);
    }

    #[test]
    fn negative_and_nan_scroll_top_treated_as_zero() {
        assert_eq!(range(50, 10.0, 30.0, 1, -100.0), range(50, 10.0, 30.0, 1, 0.0));
        assert_eq!(range(50, 10.0, 30.0, 1, f64::NAN), range(50, 10.0, 30.0, 1, 0.0));
    }

    #[test]
    fn short_list_mounts_everything() {
        assert_eq!(range(3, 10.0, 500.0, 5, 0.0), (0, 2));
    }

    #[test]
    fn fractional_heights() {
        // Item 2 spans [2.5, 3.75); scroll 2.6 into a 1.0-high container shows
        // items 2 and 3.
        assert_eq!(range(10, 1.25, 1.0, 0, 2.6), (2, 3));
    }

    #[test]
    fn rejects_bad_metrics() {
        let bad = [
            (WindowMetrics::new(0.0, 10.0), WindowError::NonPositiveItemHeight(0.0)),
            (WindowMetrics::new(-3.0, 10.0), WindowError::NonPositiveItemHeight(-3.0)),
            (WindowMetrics::new(5.0, 0.0), WindowError::NonPositiveContainerHeight(0.0)),
            (
                WindowMetrics::new(f64::NAN, 10.0),
                WindowError::NonFinite {
                    field: "item_height",
                },
            ),
            (
                WindowMetrics::new(5.0, f64::INFINITY),
                WindowError::NonFinite {
                    field: "container_height",
                },
            ),
        ];
        for (metrics, expected) in bad {
            assert_eq!(compute_window(10, &metrics, 0.0), Err(expected));
            // Empty lists are still validated.
            assert!(compute_window(0, &metrics, 0.0).is_err());
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            WindowError::NonPositiveItemHeight(-1.0).to_string(),
            "item height must be positive, got -1"
        );
        assert_eq!(
            WindowError::NonFinite {
                field: "container_height"
            }
            .to_string(),
            "container_height must be finite"
        );
    }

    #[test]
    fn huge_scroll_does_not_overflow() {
        let (start, end) = range(usize::MAX, 1.0, 10.0, usize::MAX, f64::MAX);
        assert_eq!(end, usize::MAX - 1);
        assert_eq!(start, 0);
    }

    #[test]
    fn max_scroll_top_of_empty_list_is_zero() {
        assert_eq!(max_scroll_top(0, 40.0), 0.0);
        assert_eq!(max_scroll_top(5, 40.0), 160.0);
    }
}
