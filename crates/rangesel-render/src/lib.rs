//! Rangesel Render Library
//!
//! Renderer abstraction and implementations for the range selection widget.
//! The default implementation uses Vello for GPU-accelerated rendering.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{RenderContext, Renderer};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::{ScenePainter, VelloRenderer};
