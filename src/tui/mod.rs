//! 终端生命周期：raw mode / 备用屏幕 / 鼠标捕获的开启与恢复
//!
//! kernel 与 models 不依赖这里，终端相关的副作用都收在本模块。

pub mod terminal_guard;

pub use terminal_guard::{
    install_panic_restore, install_termination_signals, TerminalGuard, TerminalRestorer,
    TerminationSignal,
};
