#![forbid(unsafe_code)]

//! HDUI public facade crate.
//!
//! Re-exports the list widgets, the render surface and the input types, and
//! adds the fallible entry points a host calls once per frame.
//!
//! ```
//! use hdui::prelude::*;
//!
//! let posts: Vec<String> = (0..1000).map(|i| format!("post {i}")).collect();
//! let list = VirtualizedList::new(&posts, |post: &String, _index, area: Rect, frame: &mut Frame| {
//!     frame.buffer.set_string(area.x, area.y, post, area.right(), CellAttrs::empty());
//! });
//! let mut state = VirtualizedListState::new();
//! let mut frame = Frame::new(24, 6);
//!
//! list.scroll_to_index(&mut state, 999);
//! hdui::render_list(&list, frame.area(), &mut frame, &mut state)?;
//! assert_eq!(state.visible_range().end(), 999);
//! # Ok::<(), hdui::Error>(())
//! ```

pub mod error;

#[cfg(feature = "config")]
use std::path::Path;

pub use error::{ConfigError, DegradationAction, Error, RenderError, Result, WindowError};

// --- Core re-exports -------------------------------------------------------

pub use hdui_core::event::{Event, KeyCode, PanEvent, PanPhase, ScrollEvent};
pub use hdui_core::geometry::Rect;
pub use hdui_core::scroll_coalescer::ScrollCoalescer;

// --- Render re-exports -----------------------------------------------------

pub use hdui_render::buffer::Buffer;
pub use hdui_render::cell::{Cell, CellAttrs};
pub use hdui_render::frame::Frame;

// --- Widget re-exports -----------------------------------------------------

pub use hdui_widgets::config::ListConfig;
pub use hdui_widgets::infinite_scroll::{
    FeedFooter, InfiniteScroll, InfiniteScrollInput, LoadMore, footer,
};
pub use hdui_widgets::mount::{ItemKey, MountDiff};
pub use hdui_widgets::pull_to_refresh::{PullIndicator, PullPhase, PullToRefresh, RefreshRequest};
pub use hdui_widgets::scrollbar::Scrollbar;
pub use hdui_widgets::virtual_scroll::{Align, VirtualScroll};
pub use hdui_widgets::virtualized::{VirtualizedList, VirtualizedListState};
pub use hdui_widgets::window::{VisibleRange, WindowLayout, WindowMetrics, compute_window};
pub use hdui_widgets::{StatefulWidget, Widget};

#[cfg(feature = "tracing-json")]
pub use hdui_core::logging::init_json_subscriber;

/// Render `list` into `area` and surface what went wrong.
///
/// A zero-sized area is reported as [`RenderError::EmptyArea`] without
/// touching `state`. A rejected item or container height leaves the area
/// blank and is returned as [`Error::Window`]; the next render with valid
/// metrics recovers.
pub fn render_list<T, F>(
    list: &VirtualizedList<'_, T, F>,
    area: Rect,
    frame: &mut Frame,
    state: &mut VirtualizedListState,
) -> Result<()>
where
    F: Fn(&T, usize, Rect, &mut Frame),
{
    if area.is_empty() {
        #[cfg(feature = "tracing")]
        hdui_core::debug!(message = "render_list.skip", width = area.width, height = area.height);
        return Err(RenderError::EmptyArea {
            width: area.width,
            height: area.height,
        }
        .into());
    }
    list.render(area, frame, state);
    match state.last_error() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Load and validate a list config. Files ending in `.json` are read as
/// JSON, everything else as TOML.
#[cfg(feature = "config")]
pub fn load_list_config(path: impl AsRef<Path>) -> Result<ListConfig> {
    let path = path.as_ref();
    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => ListConfig::from_json_file(path)?,
        _ => ListConfig::from_toml_file(path)?,
    };
    Ok(config.validated()?)
}

/// [`load_list_config`], falling back to [`ListConfig::default`] on any
/// error.
#[cfg(feature = "config")]
#[must_use]
pub fn list_config_or_default(path: impl AsRef<Path>) -> ListConfig {
    match load_list_config(path) {
        Ok(config) => config,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            hdui_core::warn!(
                message = "config.fallback",
                error = %_err,
                action = %_err.degradation()
            );
            ListConfig::default()
        }
    }
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Align, CellAttrs, Error, Event, FeedFooter, Frame, InfiniteScroll, InfiniteScrollInput,
        ItemKey, KeyCode, ListConfig, PanEvent, PullToRefresh, Rect, Result, ScrollCoalescer,
        ScrollEvent, StatefulWidget, VirtualScroll, VirtualizedList, VirtualizedListState, Widget,
    };

    pub use crate::{core, render, widgets};
}

pub use hdui_core as core;
pub use hdui_render as render;
pub use hdui_widgets as widgets;
