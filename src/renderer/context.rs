use crate::core::{FrameBuffer, PixelSource, RenderOutput};
use crate::engine::{Driver, EngineContext};
use crate::error::{Result, ScreenError};
use crate::settings::{HardwareSettings, Overrides, RenderSettings, negotiate};

/// Owns one engine handle and drives render passes over it.
///
/// Geometry is read from the engine once, at construction. The handle is
/// released by [`RenderContext::close`] or on drop, whichever comes first.
pub struct RenderContext<C: EngineContext> {
    engine: Option<C>,
    settings: HardwareSettings,
    render_width: usize,
    render_height: usize,
    virtual_width: usize,
    virtual_height: usize,
}

impl<C: EngineContext> RenderContext<C> {
    /// Negotiates hardware settings against `defaults` and opens a context.
    pub fn open<D>(driver: &D, defaults: &HardwareSettings, overrides: &Overrides) -> Result<Self>
    where
        D: Driver<Context = C>,
    {
        let settings = negotiate(defaults, overrides)?;
        Self::init(driver, settings)
    }

    pub fn init<D>(driver: &D, settings: HardwareSettings) -> Result<Self>
    where
        D: Driver<Context = C>,
    {
        let mut engine = driver
            .init(&settings)
            .ok_or(ScreenError::ScreenInitializationFailed)?;

        let render_width = engine.render_width();
        let render_height = engine.render_height();
        let virtual_width = engine.virtual_width();
        let virtual_height = engine.virtual_height();

        if engine.framebuffer().is_none() {
            log::warn!("Engine context has no image buffer after init");
        }

        log::info!(
            "Screen context created: {}x{} text, {}x{} canvas",
            render_width,
            render_height,
            virtual_width,
            virtual_height
        );

        Ok(Self {
            engine: Some(engine),
            settings,
            render_width,
            render_height,
            virtual_width,
            virtual_height,
        })
    }

    /// Hardware settings the context was created with.
    pub fn settings(&self) -> &HardwareSettings {
        &self.settings
    }

    pub fn render_width(&self) -> usize {
        self.render_width
    }

    pub fn render_height(&self) -> usize {
        self.render_height
    }

    pub fn render_size(&self) -> (usize, usize) {
        (self.render_width, self.render_height)
    }

    pub fn virtual_width(&self) -> usize {
        self.virtual_width
    }

    pub fn virtual_height(&self) -> usize {
        self.virtual_height
    }

    pub fn virtual_size(&self) -> (usize, usize) {
        (self.virtual_width, self.virtual_height)
    }

    pub fn is_closed(&self) -> bool {
        self.engine.is_none()
    }

    /// The pixel canvas the next render will read.
    pub fn framebuffer(&mut self) -> Result<FrameBuffer<'_>> {
        let (width, height) = (self.virtual_width, self.virtual_height);
        let engine = self.engine.as_mut().ok_or(ScreenError::Closed)?;
        let pixels = engine.framebuffer().ok_or(ScreenError::NoImageBuffer)?;
        FrameBuffer::new(pixels, width, height)
    }

    /// Copies `source` onto the canvas, clipped to its bounds.
    pub fn blit<S: PixelSource + ?Sized>(&mut self, x: isize, y: isize, source: &S) -> Result<()> {
        self.framebuffer()?.blit(x, y, source);
        Ok(())
    }

    /// Renders with the default render settings plus `overrides`.
    pub fn render(&mut self, overrides: &Overrides) -> Result<RenderOutput> {
        if self.engine.is_none() {
            return Err(ScreenError::Closed);
        }
        let settings = negotiate(&RenderSettings::DEFAULT, overrides)?;
        self.render_with(&settings)
    }

    /// Runs one full-screen render pass and copies the result out.
    pub fn render_with(&mut self, settings: &RenderSettings) -> Result<RenderOutput> {
        let (width, height) = (self.render_width, self.render_height);
        let engine = self.engine.as_mut().ok_or(ScreenError::Closed)?;

        if engine.framebuffer().is_none() {
            return Err(ScreenError::NoImageBuffer);
        }

        log::debug!("Rendering {}x{} with {:?}", width, height, settings);
        engine.render(settings, 0, 0, width, height);

        let text = engine.text().ok_or(ScreenError::NoImageBuffer)?;
        let attrs = engine.attrs().ok_or(ScreenError::NoImageBuffer)?;
        RenderOutput::from_engine(width, height, text, attrs)
    }

    /// Releases the engine handle. Calling it again does nothing.
    pub fn close(&mut self) {
        if let Some(engine) = self.engine.take() {
            engine.close();
            log::info!("Screen context closed");
        }
    }
}

impl<C: EngineContext> Drop for RenderContext<C> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<C: EngineContext> std::fmt::Debug for RenderContext<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("render_size", &self.render_size())
            .field("virtual_size", &self.virtual_size())
            .field("closed", &self.is_closed())
            .finish()
    }
}
