//! 无界面内核：AppState + Action → Store::dispatch → (state_changed, Effect)
//!
//! 所有状态变更都经过 `Store::dispatch`；I/O 以 `Effect` 形式交给应用层执行。

pub mod action;
pub mod effect;
pub mod files;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use files::{display_name, FileList, OpenOutcome, OpenedFile};
pub use state::{AppState, EditorViewport, OpenPromptState, StatusKind, StatusMessage, UiState};
pub use store::{DispatchResult, Store};
