//! Inkslate Render Library
//!
//! Replays a document onto any immediate-mode 2D surface. Ships a recording
//! surface for headless use, a Canvas2D surface in the browser and, behind
//! the `vello-renderer` feature, a Vello scene surface.

mod recording;
mod renderer;

#[cfg(target_arch = "wasm32")]
mod canvas2d;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use recording::{DrawCommand, RecordingSurface};
pub use renderer::{DrawingSurface, RenderContext, RenderResult, RendererError, render};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloSurface;
