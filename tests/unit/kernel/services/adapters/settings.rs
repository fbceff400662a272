use super::*;
use tempfile::tempdir;

#[test]
fn parse_keybinding_handles_modifiers() {
    assert_eq!(
        parse_keybinding("ctrl+o"),
        Some(Key::ctrl(KeyCode::Char('o')))
    );
    assert_eq!(
        parse_keybinding("Alt + Right"),
        Some(Key::alt(KeyCode::Right))
    );
    assert_eq!(parse_keybinding("ctrl+S"), Some(Key::new(
        KeyCode::Char('s'),
        KeyModifiers::CONTROL | KeyModifiers::SHIFT
    )));
    assert_eq!(parse_keybinding("f5"), Some(Key::simple(KeyCode::F(5))));
    assert_eq!(parse_keybinding("f"), Some(Key::simple(KeyCode::Char('f'))));
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("ctrl+nope"), None);
}

#[test]
fn default_settings_file_is_written_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg").join("settings.json");

    write_default_settings_if_missing(&path).unwrap();
    let settings = load_settings_from(&path);
    assert!(settings.editor.show_line_numbers);

    std::fs::write(&path, r#"{ "editor": { "tab_size": 8 } }"#).unwrap();
    write_default_settings_if_missing(&path).unwrap();
    assert_eq!(load_settings_from(&path).editor.tab_size, 8);
}

#[test]
fn invalid_settings_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let settings = load_settings_from(&path);
    assert_eq!(settings.editor.tab_size, 4);

    let missing = load_settings_from(&dir.path().join("absent.json"));
    assert!(missing.keybindings.is_empty());
}
