#![forbid(unsafe_code)]

//! Core: geometry, scroll/pan input events, and frame coalescing.
//!
//! # Role in HDUI
//! `hdui-core` is the input layer. It defines the canonical events that drive
//! a scroll container (wheel deltas, absolute scroll positions, touch pans,
//! resizes) and the rectangle type every widget renders into.
//!
//! # Primary responsibilities
//! - **Rect**: integer cell geometry for render areas and clipping.
//! - **Event**: scroll, pan and resize events consumed by list widgets.
//! - **ScrollCoalescer**: folds a burst of scroll events into one per frame.
//! - **logging**: `tracing` re-exports and an optional JSON subscriber.

pub mod event;
pub mod geometry;
pub mod logging;
pub mod scroll_coalescer;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, warn};
