//! UI 主题：把可配置的颜色集中管理，避免散落在渲染代码里。

use crate::kernel::services::ports::ThemeSettings;
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct UiTheme {
    pub tab_bar_bg: Color,
    pub tab_active_bg: Color,
    pub tab_active_fg: Color,
    pub tab_inactive_fg: Color,
    pub tab_accent: Color,
    pub gutter_fg: Color,
    pub gutter_active_fg: Color,
    pub selection_bg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub error_fg: Color,
    pub welcome_title_fg: Color,
    pub welcome_fg: Color,
    pub button_bg: Color,
    pub button_fg: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("RUST_EDIT_COLOR_SUPPORT") {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "256" | "ansi256" => return TerminalColorSupport::Ansi256,
            "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if ["truecolor", "24bit", "direct"]
        .iter()
        .any(|tag| colorterm.contains(tag) || term.contains(tag))
    {
        return TerminalColorSupport::TrueColor;
    }

    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }

    TerminalColorSupport::Ansi16
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            tab_bar_bg: Color::Reset,
            tab_active_bg: Color::Indexed(8),    // DarkGray
            tab_active_fg: Color::Indexed(15),   // White
            tab_inactive_fg: Color::Indexed(7),  // Gray
            tab_accent: Color::Rgb(0xF9, 0x73, 0x16),
            gutter_fg: Color::Indexed(8),
            gutter_active_fg: Color::Indexed(3), // Yellow
            selection_bg: Color::Indexed(4),     // Blue
            status_bg: Color::Indexed(8),
            status_fg: Color::Indexed(15),
            error_fg: Color::Indexed(9),         // LightRed
            welcome_title_fg: Color::Indexed(15),
            welcome_fg: Color::Indexed(7),
            button_bg: Color::Indexed(7),
            button_fg: Color::Indexed(0),
        }
    }
}

impl UiTheme {
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = Self::default();
        theme.apply_settings(settings);
        theme
    }

    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let slots: [(&mut Color, &Option<String>); 15] = [
            (&mut self.tab_bar_bg, &settings.tab_bar_bg),
            (&mut self.tab_active_bg, &settings.tab_active_bg),
            (&mut self.tab_active_fg, &settings.tab_active_fg),
            (&mut self.tab_inactive_fg, &settings.tab_inactive_fg),
            (&mut self.tab_accent, &settings.tab_accent),
            (&mut self.gutter_fg, &settings.gutter_fg),
            (&mut self.gutter_active_fg, &settings.gutter_active_fg),
            (&mut self.selection_bg, &settings.selection_bg),
            (&mut self.status_bg, &settings.status_bg),
            (&mut self.status_fg, &settings.status_fg),
            (&mut self.error_fg, &settings.error_fg),
            (&mut self.welcome_title_fg, &settings.welcome_title_fg),
            (&mut self.welcome_fg, &settings.welcome_fg),
            (&mut self.button_bg, &settings.button_bg),
            (&mut self.button_fg, &settings.button_fg),
        ];

        for (slot, value) in slots {
            let Some(value) = value else {
                continue;
            };
            match parse_color(value) {
                Some(color) => *slot = color,
                None => tracing::warn!(value = %value, "ignoring unknown theme color"),
            }
        }
    }

    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    pub fn apply_color_support(&mut self, support: TerminalColorSupport) {
        if support == TerminalColorSupport::TrueColor {
            return;
        }

        for color in [
            &mut self.tab_bar_bg,
            &mut self.tab_active_bg,
            &mut self.tab_active_fg,
            &mut self.tab_inactive_fg,
            &mut self.tab_accent,
            &mut self.gutter_fg,
            &mut self.gutter_active_fg,
            &mut self.selection_bg,
            &mut self.status_bg,
            &mut self.status_fg,
            &mut self.error_fg,
            &mut self.welcome_title_fg,
            &mut self.welcome_fg,
            &mut self.button_bg,
            &mut self.button_fg,
        ] {
            *color = map_color_for_support(*color, support);
        }
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    let c = match v.to_ascii_lowercase().as_str() {
        "reset" | "default" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };

    Some(c)
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi256_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(nearest_ansi16(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(nearest_ansi16(r, g, b))
        }
        (_, value) => value,
    }
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    (0u8..=255)
        .min_by_key(|&i| {
            let (pr, pg, pb) = ansi256_index_to_rgb(i);
            color_distance_sq((r, g, b), (pr, pg, pb))
        })
        .unwrap_or(0)
}

fn nearest_ansi16(r: u8, g: u8, b: u8) -> u8 {
    (0u8..16)
        .min_by_key(|&i| color_distance_sq((r, g, b), ANSI16_RGB[i as usize]))
        .unwrap_or(0)
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if index <= 231 {
        const LEVEL: [u8; 6] = [0, 95, 135, 175, 215, 255];
        let offset = index - 16;
        return (
            LEVEL[(offset / 36) as usize],
            LEVEL[((offset / 6) % 6) as usize],
            LEVEL[(offset % 6) as usize],
        );
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = i32::from(a.0) - i32::from(b.0);
    let dg = i32::from(a.1) - i32::from(b.1);
    let db = i32::from(a.2) - i32::from(b.2);
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
