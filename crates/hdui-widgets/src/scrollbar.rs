#![forbid(unsafe_code)]

//! Vertical scrollbar sized from a virtual content height.

use crate::Widget;
use hdui_core::geometry::Rect;
use hdui_render::cell::{Cell, CellAttrs};
use hdui_render::frame::Frame;

const TRACK: char = '│';
const THUMB: char = '█';

/// Vertical scrollbar for a container showing `viewport` of `content` units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scrollbar {
    content: f64,
    viewport: f64,
    position: f64,
}

impl Scrollbar {
    #[must_use]
    pub fn new(content: f64, viewport: f64, position: f64) -> Self {
        Self {
            content,
            viewport,
            position,
        }
    }

    /// Whether the content overflows the viewport at all.
    #[must_use]
    pub fn is_needed(&self) -> bool {
        self.content > self.viewport
    }

    /// Thumb `(top, length)` in rows for a track of `track` rows.
    #[must_use]
    pub fn thumb(&self, track: u16) -> (u16, u16) {
        if track == 0 || !self.is_needed() || self.viewport <= 0.0 {
            return (0, track);
        }
        let track_f = f64::from(track);
        let len = (track_f * self.viewport / self.content)
            .round()
            .clamp(1.0, track_f);
        let travel = track_f - len;
        let scrollable = self.content - self.viewport;
        let ratio = (self.position / scrollable).clamp(0.0, 1.0);
        let top = (travel * ratio).round();
        (top as u16, len as u16)
    }
}

impl Widget for Scrollbar {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        let (thumb_top, thumb_len) = self.thumb(area.height);
        let x = area.right() - 1;
        for dy in 0..area.height {
            let in_thumb = dy >= thumb_top && dy < thumb_top.saturating_add(thumb_len);
            let cell = if in_thumb {
                Cell::from_char(THUMB)
            } else {
                Cell::from_char(TRACK).with_attrs(CellAttrs::DIM)
            };
            frame.buffer.set(x, area.y + dy, cell);
        }
    }
}
