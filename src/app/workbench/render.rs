use super::Workbench;
use crate::core::text_width::{display_width, ellipsize};
use crate::kernel::{Action as KernelAction, StatusKind};
use crate::views::{
    compute_editor_layout, compute_tab_bar_layout, cursor_screen_position, prompt_cursor_position,
    welcome_layout, EditorSurface, OpenPrompt, TabBar, WelcomeView,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const KEY_HINTS: &str = "^O Open  ^S Save  ^W Close  ^Q Quit ";

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.last_render_area = Some(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(super::TAB_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(super::STATUS_HEIGHT),
        ])
        .split(area);

    let tab_area = chunks[0];
    let body_area = chunks[1];
    let status_area = chunks[2];

    workbench.sync_editor_viewport(body_area);
    workbench.render_tab_bar(frame, tab_area);
    workbench.render_body(frame, body_area);
    workbench.render_status(frame, status_area);

    if let Some(prompt) = workbench.store.state().ui.open_prompt.as_ref() {
        frame.render_widget(
            OpenPrompt {
                prompt,
                theme: &workbench.theme,
            },
            area,
        );
    }
}

pub(super) fn cursor_position(workbench: &Workbench) -> Option<(u16, u16)> {
    let state = workbench.store.state();
    if let Some(prompt) = state.ui.open_prompt.as_ref() {
        return prompt_cursor_position(workbench.last_render_area?, prompt);
    }

    let layout = workbench.last_editor_layout.as_ref()?;
    let file = state.files.active()?;
    cursor_screen_position(layout, file, state.config.tab_width())
}

impl Workbench {
    fn sync_editor_viewport(&mut self, body: Rect) {
        let state = self.store.state();
        let Some(file) = state.files.active() else {
            return;
        };

        let layout = compute_editor_layout(body, file, &state.config);
        let width = layout.content_area.width as usize;
        let height = layout.content_area.height as usize;
        let viewport = state.ui.editor_viewport;
        if viewport.width == width && viewport.height == height {
            return;
        }
        let _ = self.dispatch_kernel(KernelAction::EditorSetViewport { width, height });
    }

    fn render_tab_bar(&mut self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let files = state.files.files();
        self.last_tab_layout = compute_tab_bar_layout(area, files, state.ui.hovered_tab);
        frame.render_widget(
            TabBar {
                files,
                layout: &self.last_tab_layout,
                theme: &self.theme,
            },
            area,
        );
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let Some(file) = state.files.active() else {
            self.last_editor_layout = None;
            self.last_welcome = Some(welcome_layout(area));
            frame.render_widget(WelcomeView { theme: &self.theme }, area);
            return;
        };

        let layout = compute_editor_layout(area, file, &state.config);
        frame.render_widget(
            EditorSurface {
                file,
                layout: &layout,
                config: &state.config,
                theme: &self.theme,
            },
            area,
        );
        self.last_editor_layout = Some(layout);
        self.last_welcome = None;
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let state = self.store.state();
        let base = Style::default()
            .bg(self.theme.status_bg)
            .fg(self.theme.status_fg);

        let (text, style) = match (state.ui.status.as_ref(), state.files.active()) {
            (Some(status), _) => {
                let style = match status.kind {
                    StatusKind::Error => base.fg(self.theme.error_fg),
                    StatusKind::Info => base,
                };
                (format!(" {}", status.text), style)
            }
            (None, Some(file)) => {
                let dirty = if file.dirty { " ●" } else { "" };
                let (row, _) = file.buffer.cursor();
                let text = format!(
                    " {}{} - line {} of {}",
                    file.name,
                    dirty,
                    row + 1,
                    file.buffer.len_lines()
                );
                (text, base)
            }
            (None, None) => (" No file open".to_string(), base),
        };

        let width = area.width as usize;
        let hints_width = display_width(KEY_HINTS);
        let show_hints = display_width(&text) + hints_width + 2 <= width;
        let text = ellipsize(&text, width);
        frame.render_widget(Paragraph::new(text).style(style), area);

        if show_hints {
            let x = area.right() - hints_width as u16;
            frame
                .buffer_mut()
                .set_stringn(x, area.y, KEY_HINTS, hints_width, base);
        }
    }
}
