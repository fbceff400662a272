//! 应用层：Workbench 把内核、服务和视图串起来

pub mod theme;
pub mod workbench;

pub use theme::UiTheme;
pub use workbench::Workbench;
