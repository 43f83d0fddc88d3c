#![forbid(unsafe_code)]

//! Facade entry points: fallible rendering and config loading.

use hdui::prelude::*;
use hdui::{DegradationAction, RenderError, WindowError, render_list};

fn draw(post: &String, _index: usize, area: Rect, frame: &mut Frame) {
    frame
        .buffer
        .set_string(area.x, area.y, post, area.right(), CellAttrs::empty());
}

fn posts(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("post {i}")).collect()
}

#[test]
fn render_list_ok() {
    let items = posts(100);
    let list = VirtualizedList::new(&items, draw).show_scrollbar(false);
    let mut state = VirtualizedListState::new();
    let mut frame = Frame::new(12, 4);
    state.set_scroll_top(10.0);
    assert!(render_list(&list, frame.area(), &mut frame, &mut state).is_ok());
    assert_eq!(frame.buffer.row_text(0).trim_end(), "post 10");
}

#[test]
fn render_list_reports_empty_area() {
    let items = posts(3);
    let list = VirtualizedList::new(&items, draw);
    let mut state = VirtualizedListState::new();
    let mut frame = Frame::new(12, 4);
    let err = render_list(&list, Rect::new(0, 0, 12, 0), &mut frame, &mut state).unwrap_err();
    assert!(matches!(
        err,
        Error::Render(RenderError::EmptyArea {
            width: 12,
            height: 0
        })
    ));
    assert_eq!(err.degradation(), DegradationAction::SkipFrame);
    assert!(state.layout().is_none());
}

#[test]
fn render_list_reports_bad_metrics_then_recovers() {
    let items = posts(3);
    let mut state = VirtualizedListState::new();
    let mut frame = Frame::new(12, 4);

    let broken = VirtualizedList::new(&items, draw).item_height(0);
    let err = render_list(&broken, frame.area(), &mut frame, &mut state).unwrap_err();
    assert!(matches!(
        err,
        Error::Window(WindowError::NonPositiveItemHeight(h)) if h == 0.0
    ));
    assert_eq!(err.degradation(), DegradationAction::RenderNothing);
    assert_eq!(frame.buffer.row_text(0).trim(), "");

    let fixed = VirtualizedList::new(&items, draw);
    frame.next_pass();
    assert!(render_list(&fixed, frame.area(), &mut frame, &mut state).is_ok());
    assert!(frame.buffer.row_text(0).starts_with("post 0"));
}

#[cfg(feature = "config")]
mod config {
    use std::io::Write;

    use hdui::{ConfigError, Error, ListConfig, list_config_or_default, load_list_config};

    fn file_with(suffix: &str, body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_by_extension() {
        let toml = file_with(".toml", "overscan = 9\n");
        assert_eq!(load_list_config(toml.path()).unwrap().overscan, 9);

        let json = file_with(".json", r#"{"item_height": 4}"#);
        assert_eq!(load_list_config(json.path()).unwrap().item_height, 4);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let toml = file_with(".toml", "item_height = 0\n");
        let err = load_list_config(toml.path()).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Invalid(_))));
        assert_eq!(list_config_or_default(toml.path()), ListConfig::default());
    }

    #[test]
    fn missing_file_falls_back() {
        let err = load_list_config("/nonexistent/hdui.toml").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Io(_))));
        assert!(err.is_recoverable());
        assert_eq!(
            list_config_or_default("/nonexistent/hdui.toml"),
            ListConfig::default()
        );
    }
}
