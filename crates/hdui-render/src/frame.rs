#![forbid(unsafe_code)]

//! The render target handed to widgets.
//!
//! ```
//! use hdui_render::cell::Cell;
//! use hdui_render::frame::Frame;
//!
//! let mut frame = Frame::new(80, 24);
//! frame.buffer.set(0, 0, Cell::from_char('H'));
//! assert_eq!(frame.buffer.get(0, 0).map(|c| c.ch), Some('H'));
//! ```

use crate::buffer::Buffer;
use hdui_core::geometry::Rect;

/// The render target passed to widgets.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Cell grid widgets draw into.
    pub buffer: Buffer,
}

impl Frame {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
        }
    }

    /// The full frame area.
    #[inline]
    pub const fn area(&self) -> Rect {
        self.buffer.area()
    }

    /// Clear the buffer before drawing the next frame.
    pub fn next_pass(&mut self) {
        self.buffer.clear();
        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "frame.next_pass",
            width = self.buffer.width(),
            height = self.buffer.height()
        );
    }
}
