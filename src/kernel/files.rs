//! Open-file session state.
//!
//! `FileList` is the single owner of every [`OpenedFile`]. Every mutation goes through
//! [`FileList::set_files`], which re-checks the list after each transform: paths are
//! unique, and exactly one file is active whenever the list is non-empty.

use crate::models::TextBuffer;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct OpenedFile {
    pub name: String,
    pub file_path: PathBuf,
    pub active: bool,
    pub buffer: TextBuffer,
    pub dirty: bool,
    pub edit_version: u64,
    pub scroll_top: usize,
}

impl OpenedFile {
    pub fn new(file_path: PathBuf, content: &str) -> Self {
        Self {
            name: display_name(&file_path),
            file_path,
            active: false,
            buffer: TextBuffer::from_text(content),
            dirty: false,
            edit_version: 0,
            scroll_top: 0,
        }
    }

    pub fn content(&self) -> String {
        self.buffer.text()
    }

    /// Keeps the cursor row inside `[scroll_top, scroll_top + height)`.
    pub fn follow_cursor(&mut self, height: usize) -> bool {
        let height = height.max(1);
        let row = self.buffer.cursor().0;
        let prev = self.scroll_top;
        if row < self.scroll_top {
            self.scroll_top = row;
        } else if row >= self.scroll_top + height {
            self.scroll_top = row + 1 - height;
        }
        self.scroll_top != prev
    }

    pub fn scroll_by(&mut self, delta_lines: isize) -> bool {
        let max_top = self.buffer.len_lines().saturating_sub(1);
        let prev = self.scroll_top;
        self.scroll_top = self
            .scroll_top
            .saturating_add_signed(delta_lines)
            .min(max_top);
        self.scroll_top != prev
    }

    /// Pulls the cursor into the window after a scroll; the column is clamped to the new line.
    pub fn keep_cursor_in_window(&mut self, height: usize) -> bool {
        let height = height.max(1);
        let (row, col) = self.buffer.cursor();
        let last = self.scroll_top + height - 1;
        let target = row.clamp(self.scroll_top, last);
        if target == row {
            return false;
        }
        self.buffer.set_cursor(target, col);
        true
    }

    pub(crate) fn note_text_change(&mut self) {
        self.dirty = true;
        self.edit_version = self.edit_version.saturating_add(1);
    }
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    AlreadyOpen,
}

#[derive(Debug, Default)]
pub struct FileList {
    files: Vec<OpenedFile>,
}

impl FileList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[OpenedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn index_of(&self, path: &Path) -> Option<usize> {
        self.files.iter().position(|f| f.file_path == path)
    }

    pub fn get(&self, path: &Path) -> Option<&OpenedFile> {
        self.files.iter().find(|f| f.file_path == path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.index_of(path).is_some()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.files.iter().position(|f| f.active)
    }

    pub fn active(&self) -> Option<&OpenedFile> {
        self.files.iter().find(|f| f.active)
    }

    pub fn active_path(&self) -> Option<PathBuf> {
        self.active().map(|f| f.file_path.clone())
    }

    pub fn invariants_hold(&self) -> bool {
        let mut seen = FxHashSet::default();
        let unique = self.files.iter().all(|f| seen.insert(f.file_path.as_path()));
        let active = self.files.iter().filter(|f| f.active).count();
        unique && if self.files.is_empty() { active == 0 } else { active == 1 }
    }

    /// The only mutator: `transform` maps the previous list to the next one.
    pub fn set_files<F>(&mut self, transform: F)
    where
        F: FnOnce(Vec<OpenedFile>) -> Vec<OpenedFile>,
    {
        let prev = std::mem::take(&mut self.files);
        self.files = enforce_invariants(transform(prev));
    }

    /// Appends `file` as the active file. A path that is already open is
    /// activated instead and keeps its current content.
    pub fn open(&mut self, file: OpenedFile) -> OpenOutcome {
        if self.contains(&file.file_path) {
            self.activate(&file.file_path);
            return OpenOutcome::AlreadyOpen;
        }

        self.set_files(move |mut files| {
            for f in &mut files {
                f.active = false;
            }
            let mut file = file;
            file.active = true;
            files.push(file);
            files
        });
        OpenOutcome::Opened
    }

    pub fn activate(&mut self, path: &Path) -> bool {
        match self.get(path) {
            None => return false,
            Some(f) if f.active => return false,
            Some(_) => {}
        }

        self.set_files(|mut files| {
            for f in &mut files {
                f.active = f.file_path == path;
            }
            files
        });
        true
    }

    pub fn activate_index(&mut self, index: usize) -> bool {
        let Some(path) = self.files.get(index).map(|f| f.file_path.clone()) else {
            return false;
        };
        self.activate(&path)
    }

    /// Removes `path`. Closing the active file activates the first remaining one.
    pub fn close(&mut self, path: &Path) -> bool {
        let Some(index) = self.index_of(path) else {
            return false;
        };

        self.set_files(move |mut files| {
            let removed = files.remove(index);
            if removed.active {
                if let Some(first) = files.first_mut() {
                    first.active = true;
                }
            }
            files
        });
        true
    }

    pub fn close_active(&mut self) -> bool {
        match self.active_path() {
            Some(path) => self.close(&path),
            None => false,
        }
    }

    pub fn activate_next(&mut self) -> bool {
        let len = self.files.len();
        match self.active_index() {
            Some(active) if len > 1 => self.activate_index((active + 1) % len),
            _ => false,
        }
    }

    pub fn activate_prev(&mut self) -> bool {
        let len = self.files.len();
        match self.active_index() {
            Some(active) if len > 1 => self.activate_index((active + len - 1) % len),
            _ => false,
        }
    }

    /// Runs `edit` on the file keyed by `path`; `None` if it is not open.
    pub fn edit<R>(&mut self, path: &Path, edit: impl FnOnce(&mut OpenedFile) -> R) -> Option<R> {
        let index = self.index_of(path)?;
        let mut out = None;
        self.set_files(|mut files| {
            out = Some(edit(&mut files[index]));
            files
        });
        out
    }

    /// Clears the dirty flag unless the file was edited after `version` was written.
    pub fn mark_saved(&mut self, path: &Path, version: u64) -> bool {
        self.edit(path, |file| {
            if file.dirty && file.edit_version == version {
                file.dirty = false;
                true
            } else {
                false
            }
        })
        .unwrap_or(false)
    }
}

fn enforce_invariants(mut files: Vec<OpenedFile>) -> Vec<OpenedFile> {
    let before = files.len();
    let mut seen = FxHashSet::default();
    files.retain(|f| seen.insert(f.file_path.clone()));
    if files.len() != before {
        tracing::error!(
            dropped = before - files.len(),
            "file list transform produced duplicate paths"
        );
    }

    if files.is_empty() {
        return files;
    }

    let active = files.iter().filter(|f| f.active).count();
    if active != 1 {
        tracing::error!(active, "file list transform broke the single-active rule");
        let keep = files.iter().rposition(|f| f.active).unwrap_or(0);
        for (i, f) in files.iter_mut().enumerate() {
            f.active = i == keep;
        }
    }

    files
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/files.rs"]
mod tests;
