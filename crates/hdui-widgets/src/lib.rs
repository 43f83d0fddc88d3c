#![forbid(unsafe_code)]

//! Windowed list rendering and the scroll helpers around it.
//!
//! - [`window`]: pure visible-range computation for uniform-height lists.
//! - [`virtualized`]: the [`VirtualizedList`](virtualized::VirtualizedList) widget.
//! - [`virtual_scroll`]: the same range logic without rendering, for callers
//!   that own their scroll container.
//! - [`infinite_scroll`]: load-more trigger and feed footer.
//! - [`pull_to_refresh`]: pull gesture state machine and indicator.
//! - [`config`]: list tuning loaded from TOML or JSON.

pub mod config;
pub mod infinite_scroll;
pub mod mount;
pub mod pull_to_refresh;
pub mod scrollbar;
pub mod virtual_scroll;
pub mod virtualized;
pub mod window;

use hdui_core::geometry::Rect;
use hdui_render::cell::CellAttrs;
use hdui_render::frame::Frame;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Frame` within a given `Rect`.
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    type State;
    /// Render the widget into the frame with mutable state.
    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State);
}

/// Draw `text` centered on the first row of `area`, clipped to its width.
pub(crate) fn draw_centered(frame: &mut Frame, area: Rect, text: &str, attrs: CellAttrs) {
    if area.is_empty() {
        return;
    }
    let width = text.chars().count().min(usize::from(area.width)) as u16;
    let x = area.x + (area.width - width) / 2;
    frame.buffer.set_string(x, area.y, text, area.right(), attrs);
}
