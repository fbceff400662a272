//! 服务层
//!
//! - `ports`: 内核可见的契约与数据类型（FileProvider, Settings, EditorConfig）
//! - `adapters`: 落地实现（本地文件、tokio 运行时、设置文件、快捷键）

pub mod adapters;
pub mod ports;
