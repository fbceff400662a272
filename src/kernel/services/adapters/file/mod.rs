//! 文件服务适配器

mod local;

pub use local::LocalFileProvider;
