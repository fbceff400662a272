//! 数据模型层：rope 文本缓冲与选区

pub mod selection;
pub mod text_buffer;

pub use selection::Selection;
pub use text_buffer::{Motion, TextBuffer};
