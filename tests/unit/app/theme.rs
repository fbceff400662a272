use super::*;

#[test]
fn parse_color_accepts_names_and_hex() {
    assert_eq!(parse_color("dark_gray"), Some(Color::Indexed(8)));
    assert_eq!(parse_color("  White "), Some(Color::Indexed(15)));
    assert_eq!(parse_color("#f97316"), Some(Color::Rgb(0xF9, 0x73, 0x16)));
    assert_eq!(parse_color("reset"), Some(Color::Reset));
}

#[test]
fn parse_color_rejects_garbage() {
    assert_eq!(parse_color(""), None);
    assert_eq!(parse_color("#12345"), None);
    assert_eq!(parse_color("#zzzzzz"), None);
    assert_eq!(parse_color("#ééé"), None);
    assert_eq!(parse_color("chartreuse-ish"), None);
}

#[test]
fn default_settings_reproduce_default_theme() {
    let theme = UiTheme::from_settings(&ThemeSettings::default());
    assert_eq!(theme, UiTheme::default());
}

#[test]
fn apply_settings_overrides_only_valid_values() {
    let settings = ThemeSettings {
        tab_accent: Some("#010203".to_string()),
        status_bg: Some("not-a-color".to_string()),
        gutter_fg: None,
        ..ThemeSettings::default()
    };
    let theme = UiTheme::from_settings(&settings);
    assert_eq!(theme.tab_accent, Color::Rgb(1, 2, 3));
    assert_eq!(theme.status_bg, UiTheme::default().status_bg);
    assert_eq!(theme.gutter_fg, UiTheme::default().gutter_fg);
}

#[test]
fn font_family_has_no_effect_on_colors() {
    let settings = ThemeSettings {
        font_family: Some("JetBrains Mono".to_string()),
        ..ThemeSettings::default()
    };
    assert_eq!(UiTheme::from_settings(&settings), UiTheme::default());
}

#[test]
fn ansi16_support_maps_rgb_to_palette_indices() {
    let mut theme = UiTheme::default();
    theme.apply_color_support(TerminalColorSupport::Ansi16);
    assert!(matches!(theme.tab_accent, Color::Indexed(i) if i < 16));
    assert_eq!(theme.status_bg, Color::Indexed(8));
}

#[test]
fn ansi256_support_keeps_indexed_colors() {
    let mut theme = UiTheme {
        tab_accent: Color::Rgb(255, 0, 0),
        ..UiTheme::default()
    };
    theme.apply_color_support(TerminalColorSupport::Ansi256);
    assert_eq!(theme.tab_accent, Color::Indexed(9));
    assert_eq!(theme.gutter_active_fg, Color::Indexed(3));
}
