use super::config::EditorConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// 颜色取值：颜色名（如 `dark_gray`）或 `#rrggbb`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_bar_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_active_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_active_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_inactive_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gutter_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gutter_active_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome_title_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_fg: Option<String>,
    /// 终端无法切换字体，仅保留该字段以兼容共享的主题配置
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            tab_bar_bg: None,
            tab_active_bg: Some("dark_gray".to_string()),
            tab_active_fg: Some("white".to_string()),
            tab_inactive_fg: Some("gray".to_string()),
            tab_accent: Some("#f97316".to_string()),
            gutter_fg: Some("dark_gray".to_string()),
            gutter_active_fg: Some("yellow".to_string()),
            selection_bg: Some("blue".to_string()),
            status_bg: Some("dark_gray".to_string()),
            status_fg: Some("white".to_string()),
            error_fg: Some("light_red".to_string()),
            welcome_title_fg: Some("white".to_string()),
            welcome_fg: Some("gray".to_string()),
            button_bg: Some("gray".to_string()),
            button_fg: Some("black".to_string()),
            font_family: None,
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
