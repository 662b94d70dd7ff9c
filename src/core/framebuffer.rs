use crate::error::{Result, ScreenError};

/// Rectangular grayscale image that can be blitted onto a [`FrameBuffer`].
pub trait PixelSource {
    /// `(width, height)` in pixels
    fn size(&self) -> (usize, usize);

    /// Pixel at `(x, y)`; only called with in-bounds coordinates.
    fn pixel(&self, x: usize, y: usize) -> u8;
}

/// Owned grayscale image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl Pixmap {
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0)
    }

    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            pixels: vec![value; width * height],
            width,
            height,
        }
    }

    /// Wraps row-major pixel data; `None` if the length does not match.
    pub fn from_vec(width: usize, height: usize, pixels: Vec<u8>) -> Option<Self> {
        (pixels.len() == width * height).then_some(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> u8) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = value;
        }
    }
}

impl PixelSource for Pixmap {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.width + x]
    }
}

#[cfg(feature = "image")]
impl PixelSource for image::GrayImage {
    fn size(&self) -> (usize, usize) {
        (self.width() as usize, self.height() as usize)
    }

    fn pixel(&self, x: usize, y: usize) -> u8 {
        self.get_pixel(x as u32, y as u32).0[0]
    }
}

/// Mutable view over the engine's pixel canvas.
///
/// Coordinates are canvas pixels (virtual geometry). Row-major, one byte per
/// pixel.
#[derive(Debug)]
pub struct FrameBuffer<'a> {
    pixels: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> FrameBuffer<'a> {
    /// Wraps an engine buffer. Fails with `NoImageBuffer` if it is shorter than
    /// `width * height`.
    pub fn new(pixels: &'a mut [u8], width: usize, height: usize) -> Result<Self> {
        let len = width * height;
        if pixels.len() < len {
            return Err(ScreenError::NoImageBuffer);
        }
        Ok(Self {
            pixels: &mut pixels[..len],
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Panics if `(x, y)` is outside the canvas.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width, "column {} out of range", x);
        self.pixels[y * self.width + x]
    }

    /// Panics if `(x, y)` is outside the canvas.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        assert!(x < self.width, "column {} out of range", x);
        self.pixels[y * self.width + x] = value;
    }

    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.pixels[start..start + self.width])
    }

    pub fn fill(&mut self, value: u8) {
        self.pixels.fill(value);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &*self.pixels
    }

    /// Copies `source` with its top-left corner at `(origin_x, origin_y)`.
    ///
    /// Only the part overlapping the canvas is written. A source entirely
    /// outside the canvas leaves it untouched.
    pub fn blit<S: PixelSource + ?Sized>(&mut self, origin_x: isize, origin_y: isize, source: &S) {
        let (src_width, src_height) = source.size();
        let src_width = isize::try_from(src_width).unwrap_or(isize::MAX);
        let src_height = isize::try_from(src_height).unwrap_or(isize::MAX);
        let width = isize::try_from(self.width).unwrap_or(isize::MAX);
        let height = isize::try_from(self.height).unwrap_or(isize::MAX);

        let x_start = origin_x.max(0);
        let y_start = origin_y.max(0);
        let x_end = origin_x.saturating_add(src_width).min(width);
        let y_end = origin_y.saturating_add(src_height).min(height);

        if x_start >= x_end || y_start >= y_end {
            return;
        }

        for y in y_start..y_end {
            let row = y as usize * self.width;
            let src_y = (y - origin_y) as usize;
            for x in x_start..x_end {
                self.pixels[row + x as usize] = source.pixel((x - origin_x) as usize, src_y);
            }
        }
    }
}
