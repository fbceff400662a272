use std::path::PathBuf;

use crate::core::Command;
use crate::models::Motion;

use super::files::{OpenOutcome, OpenedFile};
use super::state::{OpenPromptState, StatusMessage};
use super::{Action, AppState, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn effect(effect: Effect, state_changed: bool) -> Self {
        Self {
            effects: vec![effect],
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::OpenPath(path) => self.open_path(path),
            Action::FileLoaded { path, content } => {
                let outcome = self.state.files.open(OpenedFile::new(path.clone(), &content));
                match outcome {
                    OpenOutcome::Opened => {
                        tracing::info!(path = %path.display(), "file opened");
                    }
                    OpenOutcome::AlreadyOpen => {
                        tracing::debug!(path = %path.display(), "file already open, activated");
                    }
                }
                DispatchResult::changed(true)
            }
            Action::FileLoadFailed { path, error } => {
                tracing::error!(path = %path.display(), error = %error, "open file failed");
                self.state.ui.status = Some(StatusMessage::error(format!(
                    "Cannot open {}: {}",
                    path.display(),
                    error
                )));
                DispatchResult::changed(true)
            }
            Action::FileSaved { path, version } => {
                let Some(name) = self.state.files.get(&path).map(|f| f.name.clone()) else {
                    tracing::debug!(path = %path.display(), "saved file is no longer open");
                    return DispatchResult::changed(false);
                };
                self.state.files.mark_saved(&path, version);
                tracing::info!(path = %path.display(), version, "file saved");
                self.state.ui.status = Some(StatusMessage::info(format!("Saved {name}")));
                DispatchResult::changed(true)
            }
            Action::FileSaveFailed { path, error } => {
                tracing::error!(path = %path.display(), error = %error, "save file failed");
                self.state.ui.status = Some(StatusMessage::error(format!(
                    "Cannot save {}: {}",
                    path.display(),
                    error
                )));
                DispatchResult::changed(true)
            }
            Action::ActivateTab { path } => {
                DispatchResult::changed(self.state.files.activate(&path))
            }
            Action::CloseTab { path } => {
                let removed = self.state.files.index_of(&path);
                let changed = self.state.files.close(&path);
                if changed {
                    self.forget_closed_tab(removed);
                }
                DispatchResult::changed(changed)
            }
            Action::SetHoveredTab(hovered) => {
                let hovered = hovered.filter(|&i| i < self.state.files.len());
                let changed = self.state.ui.hovered_tab != hovered;
                self.state.ui.hovered_tab = hovered;
                DispatchResult::changed(changed)
            }
            Action::EditorSetViewport { width, height } => {
                let viewport = &mut self.state.ui.editor_viewport;
                let mut changed = viewport.width != width || viewport.height != height;
                viewport.width = width;
                viewport.height = height;
                changed |= self.edit_active(|file| file.follow_cursor(height));
                DispatchResult::changed(changed)
            }
            Action::EditorPlaceCursor { row, col } => {
                let height = self.state.ui.editor_viewport.height;
                let changed = self.edit_active(|file| {
                    let before = (file.buffer.cursor(), file.buffer.has_selection());
                    file.buffer.set_cursor(row, col);
                    file.follow_cursor(height);
                    before != (file.buffer.cursor(), file.buffer.has_selection())
                });
                DispatchResult::changed(changed)
            }
            Action::EditorScroll { delta } => {
                let height = self.state.ui.editor_viewport.height;
                let changed = self.edit_active(|file| {
                    let scrolled = file.scroll_by(delta);
                    if scrolled {
                        file.keep_cursor_in_window(height);
                    }
                    scrolled
                });
                DispatchResult::changed(changed)
            }
            Action::EditorInsertText(text) => {
                let height = self.state.ui.editor_viewport.height;
                let changed = self.edit_active(|file| {
                    let changed = file.buffer.insert_str(&text);
                    if changed {
                        file.note_text_change();
                        file.follow_cursor(height);
                    }
                    changed
                });
                DispatchResult::changed(changed)
            }
            Action::OpenPromptAppend(ch) => match self.state.ui.open_prompt.as_mut() {
                Some(prompt) => {
                    prompt.input.push(ch);
                    DispatchResult::changed(true)
                }
                None => DispatchResult::changed(false),
            },
            Action::OpenPromptBackspace => match self.state.ui.open_prompt.as_mut() {
                Some(prompt) => DispatchResult::changed(prompt.input.pop().is_some()),
                None => DispatchResult::changed(false),
            },
            Action::OpenPromptSubmit => {
                let Some(prompt) = self.state.ui.open_prompt.take() else {
                    return DispatchResult::changed(false);
                };
                match prompt.path() {
                    Some(path) => {
                        let mut result = self.open_path(path);
                        result.state_changed = true;
                        result
                    }
                    None => {
                        tracing::debug!("open prompt submitted without a path");
                        DispatchResult::changed(true)
                    }
                }
            }
            Action::OpenPromptCancel => {
                DispatchResult::changed(self.state.ui.open_prompt.take().is_some())
            }
            Action::ClearStatus => DispatchResult::changed(self.state.ui.status.take().is_some()),
        }
    }

    fn open_path(&mut self, path: PathBuf) -> DispatchResult {
        if self.state.files.contains(&path) {
            return DispatchResult::changed(self.state.files.activate(&path));
        }
        DispatchResult::effect(Effect::LoadFile(path), false)
    }

    fn dispatch_command(&mut self, cmd: Command) -> DispatchResult {
        match cmd {
            Command::OpenFile => {
                self.state.ui.open_prompt = Some(OpenPromptState::default());
                DispatchResult::changed(true)
            }
            Command::Save => {
                let Some(file) = self.state.files.active() else {
                    return DispatchResult::changed(false);
                };
                DispatchResult::effect(
                    Effect::WriteFile {
                        path: file.file_path.clone(),
                        version: file.edit_version,
                        rope: file.buffer.rope().clone(),
                    },
                    false,
                )
            }
            Command::CloseTab => {
                let removed = self.state.files.active_index();
                let changed = self.state.files.close_active();
                if changed {
                    self.forget_closed_tab(removed);
                }
                DispatchResult::changed(changed)
            }
            Command::NextTab => DispatchResult::changed(self.state.files.activate_next()),
            Command::PrevTab => DispatchResult::changed(self.state.files.activate_prev()),
            Command::Quit => DispatchResult::changed(false),
            Command::Custom(name) => {
                tracing::debug!(command = %name, "unhandled command");
                DispatchResult::changed(false)
            }
            cmd => DispatchResult::changed(self.apply_editor_command(cmd)),
        }
    }

    fn apply_editor_command(&mut self, cmd: Command) -> bool {
        let height = self.state.ui.editor_viewport.height.max(1);
        self.edit_active(|file| {
            let buffer = &mut file.buffer;
            let (changed, text_changed) = match cmd {
                Command::CursorLeft => (buffer.move_cursor(Motion::Left, false), false),
                Command::CursorRight => (buffer.move_cursor(Motion::Right, false), false),
                Command::CursorUp => (buffer.move_cursor(Motion::Up, false), false),
                Command::CursorDown => (buffer.move_cursor(Motion::Down, false), false),
                Command::CursorLineStart => (buffer.move_cursor(Motion::LineStart, false), false),
                Command::CursorLineEnd => (buffer.move_cursor(Motion::LineEnd, false), false),
                Command::CursorFileStart => (buffer.move_cursor(Motion::FileStart, false), false),
                Command::CursorFileEnd => (buffer.move_cursor(Motion::FileEnd, false), false),
                Command::PageUp => (buffer.move_cursor(Motion::PageUp(height), false), false),
                Command::PageDown => (buffer.move_cursor(Motion::PageDown(height), false), false),
                Command::SelectLeft => (buffer.move_cursor(Motion::Left, true), false),
                Command::SelectRight => (buffer.move_cursor(Motion::Right, true), false),
                Command::SelectUp => (buffer.move_cursor(Motion::Up, true), false),
                Command::SelectDown => (buffer.move_cursor(Motion::Down, true), false),
                Command::SelectLineStart => (buffer.move_cursor(Motion::LineStart, true), false),
                Command::SelectLineEnd => (buffer.move_cursor(Motion::LineEnd, true), false),
                Command::ClearSelection => (buffer.clear_selection(), false),
                Command::InsertChar(ch) => {
                    let changed = buffer.insert_char(ch);
                    (changed, changed)
                }
                Command::InsertNewline => {
                    let changed = buffer.insert_char('\n');
                    (changed, changed)
                }
                Command::InsertTab => {
                    let changed = buffer.insert_char('\t');
                    (changed, changed)
                }
                Command::DeleteBackward => {
                    let changed = buffer.delete_backward();
                    (changed, changed)
                }
                Command::DeleteForward => {
                    let changed = buffer.delete_forward();
                    (changed, changed)
                }
                _ => (false, false),
            };

            if text_changed {
                file.note_text_change();
            }
            let scrolled = file.follow_cursor(height);
            changed || scrolled
        })
    }

    /// Applies `edit` to the active file; `false` when nothing is open.
    fn edit_active(&mut self, edit: impl FnOnce(&mut OpenedFile) -> bool) -> bool {
        let Some(path) = self.state.files.active_path() else {
            return false;
        };
        self.state.files.edit(&path, edit).unwrap_or(false)
    }

    /// Hover is an index, so it shifts down when an earlier tab goes away.
    fn forget_closed_tab(&mut self, removed: Option<usize>) {
        let hovered = match (self.state.ui.hovered_tab, removed) {
            (Some(h), Some(r)) if h == r => None,
            (Some(h), Some(r)) if h > r => Some(h - 1),
            (hovered, _) => hovered,
        };
        self.state.ui.hovered_tab = hovered.filter(|&i| i < self.state.files.len());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
