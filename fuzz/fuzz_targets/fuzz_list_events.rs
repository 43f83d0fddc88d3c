#![no_main]

use arbitrary::Arbitrary;
use hdui_core::event::{Event, KeyCode, ScrollEvent};
use hdui_core::geometry::Rect;
use hdui_core::scroll_coalescer::ScrollCoalescer;
use hdui_render::frame::Frame;
use hdui_widgets::StatefulWidget;
use hdui_widgets::virtualized::{VirtualizedList, VirtualizedListState};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    ScrollBy(f64),
    ScrollTo(f64),
    Key(u8),
    Resize(u8, u8),
    SetLen(u16),
    Frame,
}

#[derive(Debug, Arbitrary)]
struct Input {
    item_height: u8,
    overscan: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    if input.ops.len() > 256 {
        return;
    }
    let mut len = 100usize;
    let mut size = (20u16, 10u16);
    let mut state = VirtualizedListState::new();
    let mut coalescer = ScrollCoalescer::new();
    let item_height = u16::from(input.item_height % 8);
    let overscan = usize::from(input.overscan % 16);

    for op in input.ops {
        let event = match op {
            Op::ScrollBy(d) => Some(Event::Scroll(ScrollEvent::By(d))),
            Op::ScrollTo(t) => Some(Event::Scroll(ScrollEvent::To(t))),
            Op::Key(k) => Some(Event::Key(match k % 6 {
                0 => KeyCode::Up,
                1 => KeyCode::Down,
                2 => KeyCode::PageUp,
                3 => KeyCode::PageDown,
                4 => KeyCode::Home,
                _ => KeyCode::End,
            })),
            Op::Resize(w, h) => {
                size = (u16::from(w % 120), u16::from(h % 60));
                None
            }
            Op::SetLen(n) => {
                len = usize::from(n);
                None
            }
            Op::Frame => {
                if let Some(event) = coalescer.flush() {
                    state.handle_event(&event);
                }
                let items: Vec<usize> = (0..len).collect();
                let list = VirtualizedList::new(&items, |_: &usize, _, area: Rect, frame: &mut Frame| {
                    assert!(frame.buffer.area().contains(area.x, area.y) || area.is_empty());
                })
                .item_height(item_height)
                .overscan(overscan);
                let mut frame = Frame::new(size.0, size.1);
                list.render(frame.area(), &mut frame, &mut state);

                let top = state.scroll_top();
                assert!(top.is_finite() && top >= 0.0, "bad scroll_top {top}");
                let range = state.visible_range();
                if state.last_error().is_none() && len > 0 {
                    assert!(range.end() < len);
                    assert!(state.max_scroll_top().is_some_and(|max| top <= max));
                }
                None
            }
        };
        if let Some(event) = event.and_then(|e| coalescer.push(e)) {
            state.handle_event(&event);
        }
    }
});
