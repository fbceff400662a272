use super::*;

fn row_text(buf: &Buffer, y: u16) -> String {
    let area = buf.area;
    (area.x..area.right())
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

#[test]
fn welcome_layout_centres_title_hint_and_button() {
    let layout = welcome_layout(Rect::new(0, 0, 40, 10));
    assert_eq!(layout.title, Rect::new(10, 3, 20, 1));
    assert_eq!(layout.hint, Rect::new(6, 4, 27, 1));
    assert_eq!(layout.button, Rect::new(13, 6, 13, 1));
}

#[test]
fn welcome_layout_is_empty_when_area_too_small() {
    assert_eq!(welcome_layout(Rect::new(0, 0, 40, 3)), WelcomeLayout::default());
}

#[test]
fn welcome_view_renders_texts() {
    let area = Rect::new(0, 0, 40, 10);
    let mut buf = Buffer::empty(area);
    let theme = UiTheme::default();
    WelcomeView { theme: &theme }.render(area, &mut buf);

    assert!(row_text(&buf, 3).contains(WELCOME_TITLE));
    assert!(row_text(&buf, 4).contains(WELCOME_HINT));
    assert!(row_text(&buf, 6).contains(OPEN_BUTTON_LABEL));
    assert_eq!(buf[(13, 6)].bg, theme.button_bg);
}

#[test]
fn prompt_area_is_centred_and_capped() {
    assert_eq!(prompt_area(Rect::new(0, 0, 80, 24)), Rect::new(8, 7, 64, 3));
    assert_eq!(prompt_area(Rect::new(0, 0, 30, 10)), Rect::new(2, 2, 26, 3));
    assert_eq!(prompt_area(Rect::new(0, 0, 6, 10)), Rect::default());
}

#[test]
fn prompt_renders_label_and_input() {
    let area = Rect::new(0, 0, 80, 24);
    let mut buf = Buffer::empty(area);
    let theme = UiTheme::default();
    let prompt = OpenPromptState {
        input: "/tmp/a.txt".to_string(),
    };
    OpenPrompt {
        prompt: &prompt,
        theme: &theme,
    }
    .render(area, &mut buf);

    assert!(row_text(&buf, 7).contains("Open File"));
    assert!(row_text(&buf, 8).contains("Path: /tmp/a.txt"));
    assert_eq!(prompt_cursor_position(area, &prompt), Some((25, 8)));
}

#[test]
fn long_input_keeps_its_end_visible() {
    let area = Rect::new(0, 0, 80, 24);
    let input = format!("/{}/notes.txt", "d".repeat(100));
    let shown = visible_input(&input, 62);
    assert!(shown.ends_with("/notes.txt"));
    assert_eq!(display_width(shown), 55);

    let prompt = OpenPromptState { input };
    assert_eq!(prompt_cursor_position(area, &prompt), Some((9 + 61, 8)));
}
