pub mod context;
pub mod encoder;

pub use context::RenderContext;
pub use encoder::AttributeEncoder;
