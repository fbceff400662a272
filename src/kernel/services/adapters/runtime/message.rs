use std::path::PathBuf;

/// Replies from the runtime to the event loop, one per request.
#[derive(Debug)]
pub enum AppMessage {
    FileLoaded { path: PathBuf, content: String },
    FileLoadFailed { path: PathBuf, error: String },
    /// `version` is the edit version the written snapshot was taken at.
    FileSaved { path: PathBuf, version: u64 },
    FileSaveFailed { path: PathBuf, error: String },
}

impl AppMessage {
    pub fn path(&self) -> &std::path::Path {
        match self {
            AppMessage::FileLoaded { path, .. }
            | AppMessage::FileLoadFailed { path, .. }
            | AppMessage::FileSaved { path, .. }
            | AppMessage::FileSaveFailed { path, .. } => path,
        }
    }
}
