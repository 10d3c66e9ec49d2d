pub mod format;
pub mod reader;
pub mod writer;

pub use format::Layer;
pub use reader::parse_layer;
pub use writer::assemble;
