//! 视图层模块
//!
//! 纯渲染与命中测试，状态全部来自 kernel：
//! - TabBar: 标签栏
//! - EditorSurface: 行号 + 文本编辑区
//! - WelcomeView / OpenPrompt: 空列表欢迎页与打开文件输入框

pub mod editor_view;
pub mod open_prompt;
pub mod tab_bar;

pub use editor_view::{
    compute_editor_layout, cursor_screen_position, hit_test as hit_test_editor, EditorLayout,
    EditorSurface,
};
pub use open_prompt::{
    prompt_area, prompt_cursor_position, welcome_layout, OpenPrompt, WelcomeLayout, WelcomeView,
};
pub use tab_bar::{
    compute_tab_bar_layout, hit_test as hit_test_tab, TabBar, TabBarLayout, TabHit,
};
