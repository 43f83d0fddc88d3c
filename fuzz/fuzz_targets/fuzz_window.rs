#![no_main]

use arbitrary::Arbitrary;
use hdui_widgets::window::{WindowMetrics, compute_window};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    len: u32,
    item_height: f64,
    container_height: f64,
    overscan: u8,
    scroll_top: f64,
}

fuzz_target!(|input: Input| {
    let metrics = WindowMetrics::new(input.item_height, input.container_height)
        .with_overscan(usize::from(input.overscan));
    let len = input.len as usize;

    // Invalid heights must be rejected, never panic.
    let Ok(layout) = compute_window(len, &metrics, input.scroll_top) else {
        assert!(metrics.validate().is_err());
        return;
    };

    if len == 0 {
        assert!(layout.range.is_empty());
        assert_eq!(layout.total_height, 0.0);
        return;
    }

    let range = layout.range;
    assert!(range.start() <= range.end(), "inverted window {range:?}");
    assert!(range.end() < len, "window past end: {range:?} len={len}");
    assert!(
        range.len() <= metrics.max_window_len(),
        "window {} exceeds bound {}",
        range.len(),
        metrics.max_window_len()
    );
    assert_eq!(layout.offset, range.start() as f64 * metrics.item_height);
    assert_eq!(layout.total_height, len as f64 * metrics.item_height);

    // Pure.
    assert_eq!(compute_window(len, &metrics, input.scroll_top).ok(), Some(layout));
});
