//! 文本缓冲区模型
//!
//! 职责：
//! - 文本存储（Rope）
//! - 光标和选区管理
//! - 行列 ↔ 字符偏移映射
//!
//! 位置统一为 (行, 字符列)，列不包含行尾换行符；左右移动和删除按字素簇进行。

use super::selection::Selection;
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// ropey 默认按这些字符断行（CRLF 视为一个）
fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// 从 RopeSlice 获取字符串，优先零拷贝
fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    FileStart,
    FileEnd,
    PageUp(usize),
    PageDown(usize),
}

impl Motion {
    fn is_vertical(self) -> bool {
        matches!(
            self,
            Motion::Up | Motion::Down | Motion::PageUp(_) | Motion::PageDown(_)
        )
    }
}

#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
    cursor: (usize, usize),
    selection: Option<Selection>,
    goal_col: Option<usize>,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: (0, 0),
            selection: None,
            goal_col: None,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: (0, 0),
            selection: None,
            goal_col: None,
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn set_cursor(&mut self, row: usize, col: usize) {
        let row = row.min(self.last_row());
        let col = col.min(self.line_len(row));
        self.cursor = (row, col);
        self.selection = None;
        self.goal_col = None;
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn has_selection(&self) -> bool {
        self.selection.as_ref().is_some_and(|s| !s.is_empty())
    }

    pub fn clear_selection(&mut self) -> bool {
        self.selection.take().is_some()
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    fn last_row(&self) -> usize {
        self.rope.len_lines().saturating_sub(1)
    }

    /// 行长度（字符数，不含换行符）
    pub fn line_len(&self, row: usize) -> usize {
        if row >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(row);
        let mut len = line.len_chars();
        if len == 0 {
            return 0;
        }
        let last = line.char(len - 1);
        if is_line_break(last) {
            len -= 1;
            if last == '\n' && len > 0 && line.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        len
    }

    /// 行文本（不含换行符）
    pub fn line_text(&self, row: usize) -> Option<String> {
        if row >= self.rope.len_lines() {
            return None;
        }
        let len = self.line_len(row);
        let line = self.rope.line(row).slice(..len);
        Some(slice_to_cow(line).into_owned())
    }

    pub fn pos_to_char(&self, pos: (usize, usize)) -> usize {
        let row = pos.0.min(self.last_row());
        self.rope.line_to_char(row) + pos.1.min(self.line_len(row))
    }

    pub fn char_to_pos(&self, char_offset: usize) -> (usize, usize) {
        let char_offset = char_offset.min(self.rope.len_chars());
        let row = self.rope.char_to_line(char_offset);
        (row, char_offset - self.rope.line_to_char(row))
    }

    /// 非空选区对应的字符区间
    pub fn selected_range(&self) -> Option<(usize, usize)> {
        let selection = self.selection.as_ref().filter(|s| !s.is_empty())?;
        let (start, end) = selection.ordered();
        Some((self.pos_to_char(start), self.pos_to_char(end)))
    }

    /// 插入文本；存在选区时先替换选区
    pub fn insert_str(&mut self, text: &str) -> bool {
        let replaced = self.delete_selection();
        if text.is_empty() {
            return replaced;
        }

        let offset = self.pos_to_char(self.cursor);
        self.rope.insert(offset, text);
        self.cursor = self.char_to_pos(offset + text.chars().count());
        self.goal_col = None;
        true
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf))
    }

    pub fn delete_selection(&mut self) -> bool {
        let range = self.selected_range();
        self.selection = None;
        let Some((start, end)) = range else {
            return false;
        };
        self.rope.remove(start..end);
        self.cursor = self.char_to_pos(start);
        self.goal_col = None;
        true
    }

    pub fn delete_backward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }

        let (row, col) = self.cursor;
        let (start, new_cursor) = if col > 0 {
            let line = self.line_text(row).unwrap_or_default();
            let prev = prev_grapheme_col(&line, col);
            (self.pos_to_char((row, prev)), (row, prev))
        } else if row > 0 {
            let prev_len = self.line_len(row - 1);
            (self.pos_to_char((row - 1, prev_len)), (row - 1, prev_len))
        } else {
            return false;
        };

        let end = self.pos_to_char((row, col));
        self.rope.remove(start..end);
        self.cursor = new_cursor;
        self.goal_col = None;
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }

        let (row, col) = self.cursor;
        let len = self.line_len(row);
        let start = self.pos_to_char((row, col));
        let end = if col < len {
            let line = self.line_text(row).unwrap_or_default();
            self.pos_to_char((row, next_grapheme_col(&line, col)))
        } else if row + 1 < self.rope.len_lines() {
            self.rope.line_to_char(row + 1)
        } else {
            return false;
        };

        self.rope.remove(start..end);
        self.goal_col = None;
        true
    }

    /// 移动光标；`extend` 为 true 时扩展选区，否则清除选区
    pub fn move_cursor(&mut self, motion: Motion, extend: bool) -> bool {
        let before_cursor = self.cursor;
        let before_selection = self.selection;

        if extend {
            if self.selection.is_none() {
                self.selection = Some(Selection::collapsed(self.cursor));
            }
        } else {
            self.selection = None;
        }

        let (row, col) = self.cursor;
        let last = self.last_row();
        let goal = self.goal_col.unwrap_or(col);
        let target = match motion {
            Motion::Left => {
                if col > 0 {
                    let line = self.line_text(row).unwrap_or_default();
                    (row, prev_grapheme_col(&line, col))
                } else if row > 0 {
                    (row - 1, self.line_len(row - 1))
                } else {
                    (row, col)
                }
            }
            Motion::Right => {
                if col < self.line_len(row) {
                    let line = self.line_text(row).unwrap_or_default();
                    (row, next_grapheme_col(&line, col))
                } else if row < last {
                    (row + 1, 0)
                } else {
                    (row, col)
                }
            }
            Motion::Up if row > 0 => (row - 1, goal.min(self.line_len(row - 1))),
            Motion::Up => (0, 0),
            Motion::Down if row < last => (row + 1, goal.min(self.line_len(row + 1))),
            Motion::Down => (last, self.line_len(last)),
            Motion::LineStart => (row, 0),
            Motion::LineEnd => (row, self.line_len(row)),
            Motion::FileStart => (0, 0),
            Motion::FileEnd => (last, self.line_len(last)),
            Motion::PageUp(n) => {
                let target = row.saturating_sub(n.max(1));
                (target, goal.min(self.line_len(target)))
            }
            Motion::PageDown(n) => {
                let target = row.saturating_add(n.max(1)).min(last);
                (target, goal.min(self.line_len(target)))
            }
        };

        self.goal_col = if motion.is_vertical() { Some(goal) } else { None };
        self.cursor = target;
        if let Some(selection) = self.selection.as_mut() {
            selection.set_head(target);
        }

        self.cursor != before_cursor || self.selection != before_selection
    }
}

fn char_to_byte(s: &str, col: usize) -> usize {
    s.char_indices().nth(col).map(|(i, _)| i).unwrap_or(s.len())
}

fn prev_grapheme_col(line: &str, col: usize) -> usize {
    let byte = char_to_byte(line, col);
    let prev = line
        .grapheme_indices(true)
        .map(|(i, _)| i)
        .take_while(|i| *i < byte)
        .last();
    match prev {
        Some(i) => line[..i].chars().count(),
        None => 0,
    }
}

fn next_grapheme_col(line: &str, col: usize) -> usize {
    let byte = char_to_byte(line, col);
    line.grapheme_indices(true)
        .find(|(i, _)| *i >= byte)
        .map(|(_, g)| col + g.chars().count())
        .unwrap_or(col)
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
