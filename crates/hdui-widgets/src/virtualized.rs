#![forbid(unsafe_code)]

//! Virtualized list widget.
//!
//! Renders only the window of items computed by
//! [`compute_window`](crate::window::compute_window) while the scrollbar
//! reflects the full virtual height of the list.
//!
//! Every mounted item is drawn by a caller-supplied closure into a scratch
//! area exactly `item_height` rows tall, so content taller than a row is
//! clipped. The mounted window is placed with a single translation of
//! `start * item_height - scroll_top`; rows partially above or below the
//! viewport contribute only their visible lines.
//!
//! ```
//! use hdui_core::geometry::Rect;
//! use hdui_render::cell::CellAttrs;
//! use hdui_render::frame::Frame;
//! use hdui_widgets::StatefulWidget;
//! use hdui_widgets::virtualized::{VirtualizedList, VirtualizedListState};
//!
//! let posts: Vec<String> = (0..10_000).map(|i| format!("post {i}")).collect();
//! let list = VirtualizedList::new(&posts, |post: &String, _index, area: Rect, frame: &mut Frame| {
//!     frame.buffer.set_string(area.x, area.y, post, area.right(), CellAttrs::empty());
//! });
//!
//! let mut state = VirtualizedListState::new();
//! state.set_scroll_top(500.0);
//! let mut frame = Frame::new(20, 5);
//! list.render(frame.area(), &mut frame, &mut state);
//!
//! assert!(frame.buffer.row_text(0).starts_with("post 500"));
//! assert_eq!(state.visible_range().start(), 495);
//! ```

use std::fmt;

use crate::config::ListConfig;
use crate::mount::{ItemKey, MountDiff, MountTracker};
use crate::scrollbar::Scrollbar;
use crate::window::{
    DEFAULT_OVERSCAN, VisibleRange, WindowError, WindowLayout, WindowMetrics, compute_window,
    item_offset, max_scroll_top, sanitize_scroll_top,
};
use crate::{StatefulWidget, Widget};
use hdui_core::event::{Event, KeyCode};
use hdui_core::geometry::Rect;
use hdui_render::cell::Cell;
use hdui_render::frame::Frame;
#[cfg(feature = "tracing")]
use web_time::Instant;

type KeyFn<'a, T> = Box<dyn Fn(&T, usize) -> ItemKey + 'a>;
type ScrollListener = Box<dyn FnMut(f64)>;

/// A list that mounts only the items intersecting its viewport.
pub struct VirtualizedList<'a, T, F> {
    items: &'a [T],
    render_item: F,
    item_height: u16,
    overscan: usize,
    key_fn: Option<KeyFn<'a, T>>,
    show_scrollbar: bool,
}

impl<'a, T, F> VirtualizedList<'a, T, F>
where
    F: Fn(&T, usize, Rect, &mut Frame),
{
    /// Create a list over `items`, drawn by `render_item(item, index, area, frame)`.
    #[must_use]
    pub fn new(items: &'a [T], render_item: F) -> Self {
        Self {
            items,
            render_item,
            item_height: 1,
            overscan: DEFAULT_OVERSCAN,
            key_fn: None,
            show_scrollbar: true,
        }
    }

    /// Uniform height of every item, in rows.
    #[must_use]
    pub fn item_height(mut self, rows: u16) -> Self {
        self.item_height = rows;
        self
    }

    /// Extra items mounted on each side of the viewport.
    #[must_use]
    pub fn overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Derive a stable identity per item. Defaults to the item index.
    #[must_use]
    pub fn key_fn(mut self, key_fn: impl Fn(&T, usize) -> ItemKey + 'a) -> Self {
        self.key_fn = Some(Box::new(key_fn));
        self
    }

    /// Enable/disable the scrollbar column.
    #[must_use]
    pub fn show_scrollbar(mut self, show: bool) -> Self {
        self.show_scrollbar = show;
        self
    }

    /// Apply item height, overscan and scrollbar settings from `config`.
    #[must_use]
    pub fn config(self, config: &ListConfig) -> Self {
        self.item_height(config.item_height)
            .overscan(config.overscan)
            .show_scrollbar(config.show_scrollbar)
    }

    fn metrics(&self, container_rows: u16) -> WindowMetrics {
        WindowMetrics::new(f64::from(self.item_height), f64::from(container_rows))
            .with_overscan(self.overscan)
    }

    fn key_of(&self, index: usize) -> ItemKey {
        match &self.key_fn {
            Some(key_fn) => key_fn(&self.items[index], index),
            None => ItemKey::from_index(index),
        }
    }

    /// Scroll so `index` sits at the top of the viewport.
    ///
    /// Sets `scroll_top = index * item_height`, clamped to
    /// `[0, (len - 1) * item_height]`, and returns the new offset.
    pub fn scroll_to_index(&self, state: &mut VirtualizedListState, index: usize) -> f64 {
        let h = f64::from(self.item_height);
        state.item_height = Some(h);
        state.len = self.items.len();
        let target = item_offset(index, h).min(max_scroll_top(self.items.len(), h));
        state.set_scroll_top(target);
        state.scroll_top
    }
}

impl<T, F> fmt::Debug for VirtualizedList<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualizedList")
            .field("items", &self.items.len())
            .field("item_height", &self.item_height)
            .field("overscan", &self.overscan)
            .field("keyed", &self.key_fn.is_some())
            .field("show_scrollbar", &self.show_scrollbar)
            .finish()
    }
}

/// Scroll state for [`VirtualizedList`].
///
/// `scroll_top` is the only mutable input to the window computation and has
/// a single writer: [`set_scroll_top`](Self::set_scroll_top) (directly, or via
/// events and `scroll_to_index`). Everything else is derived at render time,
/// including the clamp against the current list length.
#[derive(Default)]
pub struct VirtualizedListState {
    scroll_top: f64,
    /// Metrics seen by the last render, used to clamp and page.
    item_height: Option<f64>,
    container_height: f64,
    len: usize,
    layout: Option<WindowLayout>,
    last_error: Option<WindowError>,
    mounts: MountTracker,
    on_scroll: Option<ScrollListener>,
    /// Item canvas reused across renders while width and item height hold.
    scratch: Option<Frame>,
}

impl fmt::Debug for VirtualizedListState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualizedListState")
            .field("scroll_top", &self.scroll_top)
            .field("item_height", &self.item_height)
            .field("container_height", &self.container_height)
            .field("len", &self.len)
            .field("layout", &self.layout)
            .field("last_error", &self.last_error)
            .field("mounted", &self.mounts.keys().len())
            .field("on_scroll", &self.on_scroll.is_some())
            .finish()
    }
}

impl VirtualizedListState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener notified with every new scroll offset.
    pub fn set_on_scroll(&mut self, listener: impl FnMut(f64) + 'static) {
        self.on_scroll = Some(Box::new(listener));
    }

    /// Current scroll offset in rows.
    #[must_use]
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Largest offset that still shows an item, once a render has seen the list.
    #[must_use]
    pub fn max_scroll_top(&self) -> Option<f64> {
        self.item_height.map(|h| max_scroll_top(self.len, h))
    }

    /// Set the scroll offset. Returns `true` if it changed.
    ///
    /// Negative and non-finite values collapse to 0. The upper bound depends
    /// on the list length, which only the next render knows, so an offset
    /// past the end is kept here and clamped by [`sync_len`](Self::sync_len).
    pub fn set_scroll_top(&mut self, top: f64) -> bool {
        let top = sanitize_scroll_top(top);
        if top == self.scroll_top {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "virtualized.scroll", from = self.scroll_top, to = top);
        self.scroll_top = top;
        if let Some(listener) = self.on_scroll.as_mut() {
            listener(top);
        }
        true
    }

    /// Scroll by a relative amount. Returns `true` if the offset changed.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        self.set_scroll_top(self.scroll_top + delta)
    }

    /// Apply a scroll, navigation or resize event. Returns `true` if the
    /// offset changed.
    ///
    /// Scroll events are taken as reported. Keys move within the content the
    /// last render saw, so they stop at its last item. A resize only updates
    /// the page size used by `PageUp`/`PageDown`.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Scroll(scroll) => self.set_scroll_top(scroll.apply(self.scroll_top)),
            Event::Key(code) => {
                let step = self.item_height.unwrap_or(1.0);
                let page = self.container_height.max(step);
                let target = match code {
                    KeyCode::Up => self.scroll_top - step,
                    KeyCode::Down => self.scroll_top + step,
                    KeyCode::PageUp => self.scroll_top - page,
                    KeyCode::PageDown => self.scroll_top + page,
                    KeyCode::Home => 0.0,
                    KeyCode::End => self.max_scroll_top().unwrap_or(0.0),
                };
                let target = match self.max_scroll_top() {
                    Some(max) => target.min(max.max(self.scroll_top)),
                    None => target,
                };
                self.set_scroll_top(target)
            }
            Event::Resize { height, .. } => {
                if *height > 0 {
                    self.container_height = f64::from(*height);
                }
                false
            }
            Event::Pan(_) => false,
        }
    }

    /// Record the current list length and item height. An offset past the
    /// last item (after a shrink, or set before the first render) is clamped
    /// to the new maximum so the viewport never points past the content.
    pub fn sync_len(&mut self, len: usize, item_height: f64) {
        self.len = len;
        self.item_height = Some(item_height);
        let max = max_scroll_top(len, item_height);
        if self.scroll_top > max {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "virtualized.clamp", len, max);
            self.set_scroll_top(max);
        }
    }

    /// Layout computed by the last render.
    #[must_use]
    pub fn layout(&self) -> Option<&WindowLayout> {
        self.layout.as_ref()
    }

    /// Mounted range of the last render ([`VisibleRange::EMPTY`] before any).
    #[must_use]
    pub fn visible_range(&self) -> VisibleRange {
        self.layout.map_or(VisibleRange::EMPTY, |l| l.range)
    }

    /// Configuration error hit by the last render, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<WindowError> {
        self.last_error
    }

    /// Keys mounted by the last render, in window order.
    #[must_use]
    pub fn mounted_keys(&self) -> &[ItemKey] {
        self.mounts.keys()
    }

    /// Keys that entered or left the window in the last render.
    #[must_use]
    pub fn last_mount_diff(&self) -> &MountDiff {
        self.mounts.last_diff()
    }

    fn fail(&mut self, err: WindowError) {
        #[cfg(feature = "tracing")]
        tracing::warn!(message = "virtualized.config_error", error = %err);
        self.last_error = Some(err);
        self.layout = None;
        self.mounts.clear();
    }
}

impl<T, F> StatefulWidget for VirtualizedList<'_, T, F>
where
    F: Fn(&T, usize, Rect, &mut Frame),
{
    type State = VirtualizedListState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        #[cfg(feature = "tracing")]
        let render_start = Instant::now();
        #[cfg(feature = "tracing")]
        let render_span = tracing::debug_span!(
            "virtualized.render",
            items = self.items.len(),
            height = area.height,
            start = tracing::field::Empty,
            end = tracing::field::Empty,
            render_duration_us = tracing::field::Empty
        );
        #[cfg(feature = "tracing")]
        let _render_guard = render_span.enter();

        let metrics = self.metrics(area.height);
        if let Err(err) = metrics.validate() {
            state.fail(err);
            return;
        }

        let len = self.items.len();
        state.container_height = metrics.container_height;
        state.sync_len(len, metrics.item_height);

        let layout = match compute_window(len, &metrics, state.scroll_top) {
            Ok(layout) => layout,
            Err(err) => {
                state.fail(err);
                return;
            }
        };
        state.last_error = None;
        state.layout = Some(layout);

        let scrollbar = Scrollbar::new(layout.total_height, metrics.container_height, state.scroll_top);
        let (content, bar_area) = if self.show_scrollbar && scrollbar.is_needed() {
            area.split_right(1)
        } else {
            (area, Rect::default())
        };

        // One translation for the whole window, in whole rows.
        let top_row = state.scroll_top.floor() as i64;
        let h = i64::from(self.item_height);
        let window_y = layout.offset as i64 - top_row;
        let view_h = i64::from(content.height);

        let mut scratch = state
            .scratch
            .take()
            .filter(|f| f.buffer.width() == content.width && f.buffer.height() == self.item_height)
            .unwrap_or_else(|| Frame::new(content.width, self.item_height));
        let mut keys = Vec::with_capacity(layout.range.len());
        for (slot, index) in layout.range.indices().enumerate() {
            keys.push(self.key_of(index));

            let y_rel = window_y + slot as i64 * h;
            if y_rel + h <= 0 || y_rel >= view_h || content.width == 0 {
                continue;
            }
            let skip = (-y_rel).max(0);
            let rows = (h - skip).min(view_h - y_rel.max(0));
            let src = Rect::new(0, skip as u16, content.width, rows as u16);

            // Only the rows copied out below need to start blank.
            scratch.buffer.fill(src, Cell::BLANK);
            (self.render_item)(&self.items[index], index, scratch.area(), &mut scratch);
            frame
                .buffer
                .copy_from(&scratch.buffer, src, content.x, content.y + y_rel.max(0) as u16);
        }

        state.scratch = Some(scratch);

        if !bar_area.is_empty() {
            scrollbar.render(bar_area, frame);
        }

        let _diff = state.mounts.commit(keys);

        #[cfg(feature = "tracing")]
        {
            if !_diff.is_empty() {
                tracing::debug!(
                    message = "virtualized.mount",
                    mounted = _diff.mounted.len(),
                    unmounted = _diff.unmounted.len()
                );
            }
            render_span.record("start", layout.range.start());
            render_span.record("end", layout.range.end());
            let elapsed_us = render_start.elapsed().as_micros() as u64;
            render_span.record("render_duration_us", elapsed_us);
        }
    }
}
