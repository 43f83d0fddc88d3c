#![forbid(unsafe_code)]

//! Load-more trigger for feeds that grow at the bottom.
//!
//! A sentinel sits at the end of the content. Once it comes within
//! `threshold` of the viewport bottom, [`InfiniteScroll::update`] emits a
//! single [`LoadMore`]. The trigger stays disarmed until the page load
//! finishes or the sentinel leaves the margin again, so a burst of scroll
//! events near the end asks for one page, not dozens.

use crate::{Widget, draw_centered};
use hdui_core::geometry::Rect;
use hdui_render::cell::CellAttrs;
use hdui_render::frame::Frame;

/// Distance from the end of the content at which loading starts.
pub const DEFAULT_LOAD_MORE_THRESHOLD: f64 = 200.0;

/// Per-update snapshot of the scroll container and the feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfiniteScrollInput {
    pub scroll_top: f64,
    pub container_height: f64,
    /// Full content height; the sentinel sits here.
    pub content_height: f64,
    /// The data source can produce another page.
    pub has_more: bool,
    /// A page request is in flight.
    pub is_loading: bool,
}

/// Request for the next page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadMore {
    /// Content height when the request fired.
    pub content_height: f64,
}

/// Edge-triggered load-more detector.
#[derive(Debug, Clone)]
pub struct InfiniteScroll {
    threshold: f64,
    armed: bool,
    was_loading: bool,
    requests: u64,
}

impl Default for InfiniteScroll {
    fn default() -> Self {
        Self::new()
    }
}

impl InfiniteScroll {
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_LOAD_MORE_THRESHOLD,
            armed: true,
            was_loading: false,
            requests: 0,
        }
    }

    /// Margin below the viewport that counts as "at the end". Negative and
    /// non-finite values fall back to zero.
    #[must_use]
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_finite() {
            threshold.max(0.0)
        } else {
            0.0
        };
        self
    }

    #[must_use]
    pub fn threshold_value(&self) -> f64 {
        self.threshold
    }

    /// Number of [`LoadMore`] requests emitted so far.
    #[must_use]
    pub fn requests(&self) -> u64 {
        self.requests
    }

    /// Whether the sentinel is within the margin for `input`.
    #[must_use]
    pub fn is_near_end(&self, input: &InfiniteScrollInput) -> bool {
        input.content_height - self.threshold <= input.scroll_top + input.container_height
    }

    /// Feed one scroll or data update. Returns a request at most once per
    /// approach to the end.
    pub fn update(&mut self, input: &InfiniteScrollInput) -> Option<LoadMore> {
        let near_end = self.is_near_end(input);
        if !near_end {
            self.armed = true;
        }
        if input.is_loading {
            self.was_loading = true;
            return None;
        }
        if self.was_loading {
            self.was_loading = false;
            self.armed = true;
        }
        if !near_end || !input.has_more || !self.armed {
            return None;
        }

        self.armed = false;
        self.requests += 1;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "infinite_scroll.load_more",
            content_height = input.content_height,
            scroll_top = input.scroll_top,
            requests = self.requests
        );
        Some(LoadMore {
            content_height: input.content_height,
        })
    }
}

/// What to show under the last item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedFooter {
    /// A page request is in flight.
    Loading,
    /// No more pages.
    End,
    /// Nothing to show.
    #[default]
    Idle,
}

impl FeedFooter {
    pub const LOADING_TEXT: &'static str = "Loading more...";
    pub const END_TEXT: &'static str = "You've reached the end!";

    #[must_use]
    pub fn text(self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(Self::LOADING_TEXT),
            Self::End => Some(Self::END_TEXT),
            Self::Idle => None,
        }
    }
}

/// Footer for the current feed state. Loading wins over end-of-feed.
#[must_use]
pub fn footer(has_more: bool, is_loading: bool) -> FeedFooter {
    if is_loading {
        FeedFooter::Loading
    } else if !has_more {
        FeedFooter::End
    } else {
        FeedFooter::Idle
    }
}

impl Widget for FeedFooter {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if let Some(text) = self.text() {
            draw_centered(frame, area, text, CellAttrs::DIM);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(scroll_top: f64) -> InfiniteScrollInput {
        InfiniteScrollInput {
            scroll_top,
            container_height: 500.0,
            content_height: 2000.0,
            has_more: true,
            is_loading: false,
        }
    }

    #[test]
    fn fires_inside_margin() {
        let mut feed = InfiniteScroll::new();
        assert_eq!(feed.update(&at(0.0)), None);
        assert_eq!(feed.update(&at(1299.0)), None);
        assert_eq!(
            feed.update(&at(1300.0)),
            Some(LoadMore {
                content_height: 2000.0
            })
        );
    }

    #[test]
    fn edge_triggered_while_in_margin() {
        let mut feed = InfiniteScroll::new();
        assert!(feed.update(&at(1400.0)).is_some());
        assert!(feed.update(&at(1450.0)).is_none());
        assert!(feed.update(&at(1500.0)).is_none());
        assert_eq!(feed.requests(), 1);
    }

    #[test]
    fn rearms_after_leaving_margin() {
        let mut feed = InfiniteScroll::new();
        assert!(feed.update(&at(1400.0)).is_some());
        assert!(feed.update(&at(100.0)).is_none());
        assert!(feed.update(&at(1400.0)).is_some());
    }

    #[test]
    fn rearms_after_load_finishes() {
        let mut feed = InfiniteScroll::new();
        assert!(feed.update(&at(1400.0)).is_some());
        let loading = InfiniteScrollInput {
            is_loading: true,
            ..at(1400.0)
        };
        assert!(feed.update(&loading).is_none());
        // Page arrived but it was short; still in the margin.
        let loaded = InfiniteScrollInput {
            content_height: 2100.0,
            ..at(1400.0)
        };
        assert!(feed.update(&loaded).is_some());
    }

    #[test]
    fn respects_has_more_and_loading() {
        let mut feed = InfiniteScroll::new();
        let done = InfiniteScrollInput {
            has_more: false,
            ..at(1500.0)
        };
        assert!(feed.update(&done).is_none());
        let busy = InfiniteScrollInput {
            is_loading: true,
            ..at(1500.0)
        };
        assert!(feed.update(&busy).is_none());
        assert_eq!(feed.requests(), 0);
    }

    #[test]
    fn custom_threshold() {
        let mut feed = InfiniteScroll::new().threshold(0.0);
        assert!(feed.update(&at(1499.0)).is_none());
        assert!(feed.update(&at(1500.0)).is_some());
        assert_eq!(InfiniteScroll::new().threshold(-5.0).threshold_value(), 0.0);
    }

    #[test]
    fn short_content_fires_immediately() {
        let mut feed = InfiniteScroll::new();
        let short = InfiniteScrollInput {
            content_height: 100.0,
            ..at(0.0)
        };
        assert!(feed.update(&short).is_some());
    }

    #[test]
    fn footer_states() {
        assert_eq!(footer(true, true), FeedFooter::Loading);
        assert_eq!(footer(false, true), FeedFooter::Loading);
        assert_eq!(footer(false, false), FeedFooter::End);
        assert_eq!(footer(true, false), FeedFooter::Idle);
        assert_eq!(FeedFooter::Idle.text(), None);
    }

    #[test]
    fn footer_renders_centered() {
        let mut frame = Frame::new(27, 1);
        FeedFooter::End.render(Rect::new(0, 0, 27, 1), &mut frame);
        assert_eq!(frame.buffer.row_text(0), "  You've reached the end!  ");

        let mut frame = Frame::new(10, 1);
        FeedFooter::Idle.render(Rect::new(0, 0, 10, 1), &mut frame);
        assert_eq!(frame.buffer.row_text(0), " ".repeat(10));
    }
}
