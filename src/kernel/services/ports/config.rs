use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    #[serde(alias = "tabSize")]
    pub tab_size: u8,
    #[serde(alias = "showLineNumbers")]
    pub show_line_numbers: bool,
    #[serde(alias = "scrollLines")]
    pub scroll_lines: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: 4,
            show_line_numbers: true,
            scroll_lines: 3,
        }
    }
}

impl EditorConfig {
    pub fn scroll_step(&self) -> usize {
        self.scroll_lines.max(1)
    }

    pub fn tab_width(&self) -> usize {
        self.tab_size.max(1) as usize
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
