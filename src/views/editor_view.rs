//! Editing surface: line-number gutter plus the active file's text.
//!
//! Columns in the buffer are char offsets; columns on screen are display cells
//! (tabs expand to the next multiple of `tab_size`). The helpers here convert
//! between the two for rendering, cursor placement and mouse clicks.

use crate::app::theme::UiTheme;
use crate::kernel::services::ports::EditorConfig;
use crate::kernel::OpenedFile;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorLayout {
    pub area: Rect,
    pub gutter_area: Rect,
    pub content_area: Rect,
}

/// Digits of the largest line number plus two cells of padding.
pub fn gutter_width(line_count: usize) -> u16 {
    let digits = line_count.max(1).to_string().len();
    (digits + 2).min(u16::MAX as usize) as u16
}

pub fn compute_editor_layout(area: Rect, file: &OpenedFile, config: &EditorConfig) -> EditorLayout {
    if area.width == 0 || area.height == 0 || !config.show_line_numbers {
        return EditorLayout {
            area,
            gutter_area: Rect::new(area.x, area.y, 0, area.height),
            content_area: area,
        };
    }

    let gw = gutter_width(file.buffer.len_lines()).min(area.width);
    EditorLayout {
        area,
        gutter_area: Rect::new(area.x, area.y, gw, area.height),
        content_area: Rect::new(area.x + gw, area.y, area.width - gw, area.height),
    }
}

fn grapheme_width(g: &str, display_col: usize, tab_size: usize) -> usize {
    if g == "\t" {
        tab_size - display_col % tab_size
    } else {
        g.width()
    }
}

/// Display column of char column `char_col` in `line`.
pub fn display_col(line: &str, char_col: usize, tab_size: usize) -> usize {
    let tab_size = tab_size.max(1);
    let mut col = 0usize;
    let mut chars = 0usize;
    for g in line.graphemes(true) {
        if chars >= char_col {
            break;
        }
        col += grapheme_width(g, col, tab_size);
        chars += g.chars().count();
    }
    col
}

/// Char column of the grapheme covering display column `target`; line end if past it.
pub fn char_col_at_display(line: &str, target: usize, tab_size: usize) -> usize {
    let tab_size = tab_size.max(1);
    let mut col = 0usize;
    let mut chars = 0usize;
    for g in line.graphemes(true) {
        let w = grapheme_width(g, col, tab_size);
        if w > 0 && target < col + w {
            return chars;
        }
        col += w;
        chars += g.chars().count();
    }
    chars
}

/// First visible row: the stored scroll position, pulled so the cursor stays on screen.
pub fn visible_top(file: &OpenedFile, height: u16) -> usize {
    let height = (height as usize).max(1);
    let row = file.buffer.cursor().0;
    let top = file.scroll_top;
    if row < top {
        row
    } else if row >= top + height {
        row + 1 - height
    } else {
        top
    }
}

pub fn horizontal_offset(file: &OpenedFile, width: u16, tab_size: usize) -> usize {
    let (row, col) = file.buffer.cursor();
    let line = file.buffer.line_text(row).unwrap_or_default();
    let x = display_col(&line, col, tab_size);
    let width = (width as usize).max(1);
    if x >= width {
        x + 1 - width
    } else {
        0
    }
}

pub fn cursor_screen_position(
    layout: &EditorLayout,
    file: &OpenedFile,
    tab_size: usize,
) -> Option<(u16, u16)> {
    let content = layout.content_area;
    if content.width == 0 || content.height == 0 {
        return None;
    }

    let (row, col) = file.buffer.cursor();
    let top = visible_top(file, content.height);
    let screen_row = row.checked_sub(top)?;
    if screen_row >= content.height as usize {
        return None;
    }

    let line = file.buffer.line_text(row).unwrap_or_default();
    let x = display_col(&line, col, tab_size)
        .saturating_sub(horizontal_offset(file, content.width, tab_size));
    let x = x.min(content.width.saturating_sub(1) as usize) as u16;
    Some((content.x + x, content.y + screen_row as u16))
}

/// Maps a click to a buffer position. Clicks in the gutter land on column 0,
/// clicks below the text land on the last line.
pub fn hit_test(
    layout: &EditorLayout,
    file: &OpenedFile,
    tab_size: usize,
    x: u16,
    y: u16,
) -> Option<(usize, usize)> {
    let area = layout.area;
    if x < area.x || x >= area.right() || y < area.y || y >= area.bottom() {
        return None;
    }

    let content = layout.content_area;
    let top = visible_top(file, area.height);
    let last = file.buffer.len_lines().saturating_sub(1);
    let row = (top + (y - area.y) as usize).min(last);
    if x < content.x {
        return Some((row, 0));
    }

    let line = file.buffer.line_text(row).unwrap_or_default();
    let target = (x - content.x) as usize + horizontal_offset(file, content.width, tab_size);
    Some((row, char_col_at_display(&line, target, tab_size)))
}

pub struct EditorSurface<'a> {
    pub file: &'a OpenedFile,
    pub layout: &'a EditorLayout,
    pub config: &'a EditorConfig,
    pub theme: &'a UiTheme,
}

impl EditorSurface<'_> {
    fn render_gutter(&self, top: usize, buf: &mut Buffer) {
        let area = self.layout.gutter_area;
        if area.width == 0 || area.height == 0 {
            return;
        }

        let base = Style::default().fg(self.theme.gutter_fg);
        buf.set_style(area, base);

        let digits = area.width.saturating_sub(2) as usize;
        if digits == 0 {
            return;
        }

        let buffer = &self.file.buffer;
        // No line is highlighted while a range is selected.
        let active_row = (!buffer.has_selection()).then(|| buffer.cursor().0);
        let highlight = Style::default()
            .fg(self.theme.gutter_active_fg)
            .add_modifier(Modifier::BOLD);

        for i in 0..area.height {
            let line = top + i as usize;
            if line >= buffer.len_lines() {
                break;
            }
            let style = if active_row == Some(line) {
                highlight
            } else {
                base
            };
            let label = format!("{:>digits$}", line + 1);
            buf.set_stringn(area.x, area.y + i, &label, digits, style);
        }
    }

    fn render_content(&self, top: usize, buf: &mut Buffer) {
        let area = self.layout.content_area;
        if area.width == 0 || area.height == 0 {
            return;
        }

        let base = Style::default();
        let selected = base.bg(self.theme.selection_bg);
        let tab_size = self.config.tab_width();
        let hoff = horizontal_offset(self.file, area.width, tab_size);
        let buffer = &self.file.buffer;
        let selection = buffer.selected_range();
        let right = area.right();

        for i in 0..area.height {
            let row = top + i as usize;
            let Some(line) = buffer.line_text(row) else {
                break;
            };
            let y = area.y + i;
            let line_start = buffer.pos_to_char((row, 0));

            let mut display = 0usize;
            let mut char_col = 0usize;
            for g in line.graphemes(true) {
                let w = grapheme_width(g, display, tab_size);
                let start_col = char_col;
                char_col += g.chars().count();
                let col = display;
                display += w;
                if w == 0 || col < hoff {
                    continue;
                }

                let x = area.x as usize + (col - hoff);
                if x + w > right as usize {
                    break;
                }

                let offset = line_start + start_col;
                let style = match selection {
                    Some((s, e)) if offset >= s && offset < e => selected,
                    _ => base,
                };
                let x = x as u16;
                if g == "\t" {
                    buf.set_stringn(x, y, " ".repeat(w), w, style);
                } else {
                    buf.set_stringn(x, y, g, w, style);
                }
            }
        }
    }
}

impl Widget for EditorSurface<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let top = visible_top(self.file, self.layout.area.height);
        self.render_gutter(top, buf);
        self.render_content(top, buf);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/editor_view.rs"]
mod tests;
