//! Property-based clipping tests for the cell buffer.
//!
//! 1. `set_string` never writes outside `[x, min(max_x, width))` on row `y`.
//! 2. `copy_from` writes only inside the destination bounds.
//! 3. Copied cells match the source cell at the same offset.
//! 4. `fill` touches exactly the rectangle clipped to the buffer.

use hdui_core::geometry::Rect;
use hdui_render::buffer::Buffer;
use hdui_render::cell::{Cell, CellAttrs};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn size() -> impl Strategy<Value = (u16, u16)> {
    (0u16..=24, 0u16..=12)
}

fn rect() -> impl Strategy<Value = Rect> {
    (0u16..=30, 0u16..=16, 0u16..=30, 0u16..=16).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

/// Source buffer where every cell holds a distinct letter of its row.
fn patterned(width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::new(width, height);
    for y in 0..height {
        let row: String = (0..width)
            .map(|x| char::from(b'a' + ((x + y) % 26) as u8))
            .collect();
        buf.set_string(0, y, &row, width, CellAttrs::empty());
    }
    buf
}

fn written(buf: &Buffer) -> Vec<(u16, u16)> {
    let mut out = Vec::new();
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            if buf.get(x, y).is_some_and(|c| !c.is_blank()) {
                out.push((x, y));
            }
        }
    }
    out
}

// ═════════════════════════════════════════════════════════════════════════
// 1. set_string clipping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn set_string_stays_in_row_and_limit(
        (w, h) in size(),
        x in 0u16..=30,
        y in 0u16..=16,
        max_x in 0u16..=30,
        text in "[a-z]{0,40}",
    ) {
        let mut buf = Buffer::new(w, h);
        let end = buf.set_string(x, y, &text, max_x, CellAttrs::BOLD);
        let limit = max_x.min(w);
        prop_assert!(end >= x);
        prop_assert!(end <= limit.max(x));
        for (cx, cy) in written(&buf) {
            prop_assert_eq!(cy, y);
            prop_assert!(cx >= x && cx < limit);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2 + 3. copy_from clipping and content
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn copy_from_is_clipped_and_faithful(
        (sw, sh) in size(),
        (dw, dh) in size(),
        src_rect in rect(),
        dst_x in 0u16..=30,
        dst_y in 0u16..=16,
    ) {
        let src = patterned(sw, sh);
        let mut dst = Buffer::new(dw, dh);
        dst.copy_from(&src, src_rect, dst_x, dst_y);

        let clipped = src_rect.intersection(&src.area());
        for (x, y) in written(&dst) {
            prop_assert!(x >= dst_x && y >= dst_y);
            let (dx, dy) = (x - dst_x, y - dst_y);
            prop_assert!(dx < clipped.width && dy < clipped.height);
            prop_assert_eq!(dst.get(x, y), src.get(clipped.x + dx, clipped.y + dy));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. fill
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fill_covers_exactly_the_clipped_rect((w, h) in size(), area in rect()) {
        let mut buf = Buffer::new(w, h);
        buf.fill(area, Cell::from_char('#'));
        let clipped = area.intersection(&buf.area());
        let cells = written(&buf);
        prop_assert_eq!(
            cells.len(),
            usize::from(clipped.width) * usize::from(clipped.height)
        );
        prop_assert!(cells.iter().all(|&(x, y)| clipped.contains(x, y)));
    }
}
