//! Welcome screen shown with no open files, and the path prompt used to open one.

use crate::app::theme::UiTheme;
use crate::core::text_width::{display_width, tail_start_for_width};
use crate::kernel::OpenPromptState;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

pub const WELCOME_TITLE: &str = "Welcome to Rust-Edit";
pub const WELCOME_HINT: &str = "Open a file to start coding";
pub const OPEN_BUTTON_LABEL: &str = "[ Open File ]";

const PROMPT_TITLE: &str = " Open File ";
const PROMPT_LABEL: &str = "Path: ";
const PROMPT_MAX_WIDTH: u16 = 64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WelcomeLayout {
    pub title: Rect,
    pub hint: Rect,
    pub button: Rect,
}

fn centered_line(area: Rect, y: u16, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, y, width, 1)
}

pub fn welcome_layout(area: Rect) -> WelcomeLayout {
    if area.width == 0 || area.height < 4 {
        return WelcomeLayout::default();
    }

    let top = area.y + (area.height - 4) / 2;
    WelcomeLayout {
        title: centered_line(area, top, display_width(WELCOME_TITLE) as u16),
        hint: centered_line(area, top + 1, display_width(WELCOME_HINT) as u16),
        button: centered_line(area, top + 3, display_width(OPEN_BUTTON_LABEL) as u16),
    }
}

pub struct WelcomeView<'a> {
    pub theme: &'a UiTheme,
}

impl Widget for WelcomeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = welcome_layout(area);
        if layout.button.width == 0 {
            return;
        }

        let theme = self.theme;
        let title = Style::default()
            .fg(theme.welcome_title_fg)
            .add_modifier(Modifier::BOLD);
        let hint = Style::default().fg(theme.welcome_fg);
        let button = Style::default().bg(theme.button_bg).fg(theme.button_fg);

        buf.set_stringn(
            layout.title.x,
            layout.title.y,
            WELCOME_TITLE,
            layout.title.width as usize,
            title,
        );
        buf.set_stringn(
            layout.hint.x,
            layout.hint.y,
            WELCOME_HINT,
            layout.hint.width as usize,
            hint,
        );
        buf.set_stringn(
            layout.button.x,
            layout.button.y,
            OPEN_BUTTON_LABEL,
            layout.button.width as usize,
            button,
        );
    }
}

/// Bordered three-row box centred near the top third of `area`.
pub fn prompt_area(area: Rect) -> Rect {
    if area.width < 8 || area.height < 3 {
        return Rect::default();
    }

    let width = PROMPT_MAX_WIDTH.min(area.width - 4);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - 3) / 3;
    Rect::new(x, y, width, 3)
}

fn input_area(popup: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(popup)
}

/// Slice of `input` that fits after the label, keeping the end visible.
fn visible_input(input: &str, inner_width: u16) -> &str {
    let available = (inner_width as usize)
        .saturating_sub(display_width(PROMPT_LABEL))
        .saturating_sub(1);
    &input[tail_start_for_width(input, available)..]
}

pub fn prompt_cursor_position(area: Rect, prompt: &OpenPromptState) -> Option<(u16, u16)> {
    let inner = input_area(prompt_area(area));
    if inner.width == 0 || inner.height == 0 {
        return None;
    }

    let shown = visible_input(&prompt.input, inner.width);
    let x = display_width(PROMPT_LABEL) + display_width(shown);
    let x = x.min(inner.width.saturating_sub(1) as usize) as u16;
    Some((inner.x + x, inner.y))
}

pub struct OpenPrompt<'a> {
    pub prompt: &'a OpenPromptState,
    pub theme: &'a UiTheme,
}

impl Widget for OpenPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = prompt_area(area);
        if popup.width == 0 {
            return;
        }

        Clear.render(popup, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(PROMPT_TITLE)
            .border_style(Style::default().fg(self.theme.tab_accent));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let shown = visible_input(&self.prompt.input, inner.width);
        let line = Line::from(vec![
            Span::styled(PROMPT_LABEL, Style::default().fg(self.theme.welcome_fg)),
            Span::raw(shown),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Left)
            .render(inner, buf);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/open_prompt.rs"]
mod tests;
