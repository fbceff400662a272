use super::*;
use crate::kernel::services::ports::KeybindingRule;

fn rule(key: &str, command: &str, context: Option<&str>) -> KeybindingRule {
    KeybindingRule {
        key: key.to_string(),
        command: command.to_string(),
        context: context.map(str::to_string),
    }
}

#[test]
fn editor_has_cursor_bindings() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::simple(KeyCode::Left)),
        Some(&Command::CursorLeft)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::shift(KeyCode::End)),
        Some(&Command::SelectLineEnd)
    );
}

#[test]
fn global_commands_fall_through_in_editor() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::ctrl(KeyCode::Char('w'))),
        Some(&Command::CloseTab)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::simple(KeyCode::Left)),
        None
    );
}

#[test]
fn rules_rebind_and_unbind() {
    let mut service = KeybindingService::new();
    service.apply_rules(&[
        rule("ctrl+p", "openFile", None),
        rule("ctrl+o", "", Some("global")),
        rule("not a key", "save", None),
    ]);

    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char('p'))),
        Some(&Command::OpenFile)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char('o'))),
        None
    );
}

#[test]
fn text_input_char_rejects_control_chords() {
    assert_eq!(text_input_char(&Key::simple(KeyCode::Char('x'))), Some('x'));
    assert_eq!(text_input_char(&Key::shift(KeyCode::Char('x'))), Some('X'));
    assert_eq!(text_input_char(&Key::ctrl(KeyCode::Char('x'))), None);
    assert_eq!(text_input_char(&Key::simple(KeyCode::Enter)), None);
}
