//! 核心框架：命令、输入事件、视图接口

pub mod command;
pub mod event;
pub mod text_width;
pub mod view;

pub use command::Command;
pub use event::{InputEvent, Key};
pub use view::{EventResult, View};
