//! Boundary to the external ASCII-art engine.
//!
//! The engine owns the pixel canvas and the rendered text/attribute buffers;
//! this crate only drives it. A [`Driver`] allocates contexts, an
//! [`EngineContext`] is one live engine handle.

#[cfg(feature = "libaa")]
pub mod libaa;

use crate::settings::{HardwareSettings, RenderSettings};

/// Allocates engine contexts.
pub trait Driver {
    type Context: EngineContext;

    /// Returns `None` when the engine rejects the settings or has no backend.
    fn init(&self, settings: &HardwareSettings) -> Option<Self::Context>;
}

/// One live engine handle.
pub trait EngineContext {
    /// Text grid width in characters
    fn render_width(&self) -> usize;
    /// Text grid height in characters
    fn render_height(&self) -> usize;
    /// Canvas width in pixels
    fn virtual_width(&self) -> usize;
    /// Canvas height in pixels
    fn virtual_height(&self) -> usize;

    /// Pixel canvas, `virtual_width * virtual_height` bytes.
    fn framebuffer(&mut self) -> Option<&mut [u8]>;

    /// Renders the canvas region covering text cells `(x0, y0)..(x1, y1)`.
    fn render(&mut self, settings: &RenderSettings, x0: usize, y0: usize, x1: usize, y1: usize);

    /// Characters from the last render, `render_width * render_height` bytes.
    fn text(&self) -> Option<&[u8]>;

    /// Attributes from the last render, parallel to [`EngineContext::text`].
    fn attrs(&self) -> Option<&[u8]>;

    /// Releases the handle. Consuming `self` makes a second release impossible.
    fn close(self);
}
