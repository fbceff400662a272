use std::path::PathBuf;

use crate::kernel::services::ports::EditorConfig;

use super::files::FileList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Path prompt shown by the open-file command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenPromptState {
    pub input: String,
}

impl OpenPromptState {
    pub fn path(&self) -> Option<PathBuf> {
        let trimmed = self.input.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorViewport {
    pub width: usize,
    pub height: usize,
}

impl Default for EditorViewport {
    fn default() -> Self {
        Self {
            width: 80,
            height: 20,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub open_prompt: Option<OpenPromptState>,
    pub status: Option<StatusMessage>,
    pub hovered_tab: Option<usize>,
    pub editor_viewport: EditorViewport,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub files: FileList,
    pub ui: UiState,
    pub config: EditorConfig,
}

impl AppState {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            files: FileList::new(),
            ui: UiState::default(),
            config,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
