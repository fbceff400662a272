use std::path::PathBuf;

use crate::core::Command;

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    OpenPath(PathBuf),
    FileLoaded {
        path: PathBuf,
        content: String,
    },
    FileLoadFailed {
        path: PathBuf,
        error: String,
    },
    FileSaved {
        path: PathBuf,
        version: u64,
    },
    FileSaveFailed {
        path: PathBuf,
        error: String,
    },
    ActivateTab {
        path: PathBuf,
    },
    CloseTab {
        path: PathBuf,
    },
    SetHoveredTab(Option<usize>),
    EditorSetViewport {
        width: usize,
        height: usize,
    },
    EditorPlaceCursor {
        row: usize,
        col: usize,
    },
    EditorScroll {
        delta: isize,
    },
    EditorInsertText(String),
    OpenPromptAppend(char),
    OpenPromptBackspace,
    OpenPromptSubmit,
    OpenPromptCancel,
    ClearStatus,
}
