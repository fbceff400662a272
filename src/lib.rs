//! rust-edit - 多标签 TUI 文本编辑器库
//!
//! 模块结构：
//! - core: 核心框架（View, Command, Event）
//! - kernel: 状态 / Action / Effect，以及服务层（ports + adapters）
//! - models: 数据模型（TextBuffer, Selection）
//! - views: 视图层（TabBar, EditorSurface, WelcomeView, OpenPrompt）
//! - app: 应用层（Workbench, UiTheme）
//! - tui: 终端生命周期（TerminalGuard）

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
pub mod tui;
pub mod views;
