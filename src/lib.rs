//! Virtual grayscale screen rendered to terminal character art.
//!
//! Paint pixels into a [`FrameBuffer`], let an external ASCII-art engine turn
//! them into a character/attribute grid, and flatten that grid into text with an
//! [`AttributeEncoder`] matching the terminal.

pub mod core;
pub mod engine;
pub mod error;
pub mod parser;
pub mod renderer;
pub mod settings;


pub use crate::core::{Attribute, Cell, FrameBuffer, PixelSource, Pixmap, RenderOutput};
pub use engine::{Driver, EngineContext};
pub use error::{Result, ScreenError};
pub use parser::strip_escapes;
pub use renderer::{AttributeEncoder, RenderContext};
pub use settings::{
    Dithering, Font, HardwareSettings, Negotiable, Options, Overrides, RenderSettings,
    SettingValue, negotiate,
};

/// A render context paired with the encoder for one kind of terminal.
#[derive(Debug)]
pub struct Screen<C: EngineContext> {
    context: RenderContext<C>,
    encoder: AttributeEncoder,
}

impl<C: EngineContext> Screen<C> {
    /// Opens a context requesting the attributes `encoder` supports, with
    /// `overrides` applied on top.
    pub fn new<D>(driver: &D, encoder: AttributeEncoder, overrides: &Overrides) -> Result<Self>
    where
        D: Driver<Context = C>,
    {
        let context = RenderContext::open(driver, &encoder.hardware_defaults(), overrides)?;
        Ok(Self { context, encoder })
    }

    pub fn encoder(&self) -> AttributeEncoder {
        self.encoder
    }

    pub fn context(&self) -> &RenderContext<C> {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut RenderContext<C> {
        &mut self.context
    }

    pub fn render_size(&self) -> (usize, usize) {
        self.context.render_size()
    }

    pub fn virtual_size(&self) -> (usize, usize) {
        self.context.virtual_size()
    }

    pub fn framebuffer(&mut self) -> Result<FrameBuffer<'_>> {
        self.context.framebuffer()
    }

    pub fn blit<S: PixelSource + ?Sized>(&mut self, x: isize, y: isize, source: &S) -> Result<()> {
        self.context.blit(x, y, source)
    }

    /// Renders the canvas and encodes it for the terminal.
    pub fn render(&mut self, overrides: &Overrides) -> Result<String> {
        let output = self.context.render(overrides)?;
        self.encoder.flatten(&output)
    }

    pub fn close(&mut self) {
        self.context.close();
    }
}
