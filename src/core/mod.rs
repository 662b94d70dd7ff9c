pub mod cell;
pub mod framebuffer;
pub mod grid;

pub use cell::{Attribute, Cell};
pub use framebuffer::{FrameBuffer, PixelSource, Pixmap};
pub use grid::RenderOutput;
