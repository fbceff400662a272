//! 工作台模块：统一管理视图和输入分发

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::core::view::{EventResult, View};
use crate::kernel::services::adapters::{AppMessage, AsyncRuntime, KeybindingService};
use crate::kernel::services::ports::Settings;
use crate::kernel::{Action as KernelAction, AppState, Effect as KernelEffect, Store};
use crate::views::{EditorLayout, TabBarLayout, WelcomeLayout};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::path::PathBuf;

mod input;
mod render;

const TAB_BAR_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;

pub struct Workbench {
    store: Store,
    keybindings: KeybindingService,
    theme: UiTheme,
    runtime: AsyncRuntime,
    last_render_area: Option<Rect>,
    last_tab_layout: TabBarLayout,
    last_editor_layout: Option<EditorLayout>,
    last_welcome: Option<WelcomeLayout>,
}

impl Workbench {
    pub fn new(runtime: AsyncRuntime, settings: Settings) -> Self {
        let mut keybindings = KeybindingService::with_defaults();
        keybindings.apply_rules(&settings.keybindings);

        let mut theme = UiTheme::from_settings(&settings.theme);
        if !cfg!(test) {
            theme.adapt_to_terminal_capabilities();
        }

        Self {
            store: Store::new(AppState::new(settings.editor)),
            keybindings,
            theme,
            runtime,
            last_render_area: None,
            last_tab_layout: TabBarLayout::default(),
            last_editor_layout: None,
            last_welcome: None,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Requests a read for each path; results arrive later through `handle_message`.
    pub fn open_paths<I>(&mut self, paths: I) -> bool
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut changed = false;
        for path in paths {
            changed |= self.dispatch_kernel(KernelAction::OpenPath(path));
        }
        changed
    }

    pub fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: KernelEffect) {
        match effect {
            KernelEffect::LoadFile(path) => {
                tracing::debug!(path = %path.display(), "load_file requested");
                self.runtime.load_file(path);
            }
            KernelEffect::WriteFile {
                path,
                version,
                rope,
            } => {
                tracing::debug!(path = %path.display(), version, "write_file requested");
                self.runtime.write_file(path, version, rope);
            }
        }
    }

    pub fn handle_message(&mut self, msg: AppMessage) -> bool {
        tracing::trace!(path = %msg.path().display(), "runtime message");
        match msg {
            AppMessage::FileLoaded { path, content } => {
                self.dispatch_kernel(KernelAction::FileLoaded { path, content })
            }
            AppMessage::FileLoadFailed { path, error } => {
                self.dispatch_kernel(KernelAction::FileLoadFailed { path, error })
            }
            AppMessage::FileSaved { path, version } => {
                self.dispatch_kernel(KernelAction::FileSaved { path, version })
            }
            AppMessage::FileSaveFailed { path, error } => {
                self.dispatch_kernel(KernelAction::FileSaveFailed { path, error })
            }
        }
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area)
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        render::cursor_position(self)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
