#![forbid(unsafe_code)]

//! Render surface: cells, buffers, and frames.
//!
//! # Role in HDUI
//! Widgets draw into a [`frame::Frame`], a thin wrapper over a
//! [`buffer::Buffer`] of [`cell::Cell`]s. The buffer clips every write to its
//! bounds, so a widget can never write outside the surface it was given.

pub mod buffer;
pub mod cell;
pub mod frame;
