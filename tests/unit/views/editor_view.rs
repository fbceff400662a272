use super::*;
use std::path::PathBuf;

fn file(content: &str) -> OpenedFile {
    let mut f = OpenedFile::new(PathBuf::from("/w/a.rs"), content);
    f.active = true;
    f
}

fn render(f: &OpenedFile, config: &EditorConfig, area: Rect) -> (Buffer, EditorLayout) {
    let layout = compute_editor_layout(area, f, config);
    let theme = UiTheme::default();
    let mut buf = Buffer::empty(area);
    EditorSurface {
        file: f,
        layout: &layout,
        config,
        theme: &theme,
    }
    .render(area, &mut buf);
    (buf, layout)
}

fn row_text(buf: &Buffer, y: u16) -> String {
    let area = buf.area;
    (area.x..area.right())
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

#[test]
fn gutter_width_grows_with_line_count() {
    assert_eq!(gutter_width(0), 3);
    assert_eq!(gutter_width(9), 3);
    assert_eq!(gutter_width(10), 4);
    assert_eq!(gutter_width(1000), 6);
}

#[test]
fn disabled_line_numbers_give_content_the_whole_area() {
    let config = EditorConfig {
        show_line_numbers: false,
        ..EditorConfig::default()
    };
    let area = Rect::new(0, 1, 20, 5);
    let layout = compute_editor_layout(area, &file("a\nb"), &config);
    assert_eq!(layout.content_area, area);
    assert_eq!(layout.gutter_area.width, 0);
}

#[test]
fn display_col_expands_tabs_and_wide_chars() {
    assert_eq!(display_col("\tx", 1, 4), 4);
    assert_eq!(display_col("ab\tx", 3, 4), 4);
    assert_eq!(display_col("中文x", 2, 4), 4);
    assert_eq!(display_col("abc", 10, 4), 3);
}

#[test]
fn char_col_at_display_inverts_display_col() {
    assert_eq!(char_col_at_display("\tx", 2, 4), 0);
    assert_eq!(char_col_at_display("\tx", 4, 4), 1);
    assert_eq!(char_col_at_display("中文x", 3, 4), 1);
    assert_eq!(char_col_at_display("abc", 99, 4), 3);
}

#[test]
fn renders_numbers_and_text() {
    let f = file("fn main() {\n}\n");
    let (buf, _) = render(&f, &EditorConfig::default(), Rect::new(0, 0, 20, 4));
    assert_eq!(row_text(&buf, 0), "1  fn main() {      ");
    assert_eq!(row_text(&buf, 1), "2  }                ");
    assert_eq!(row_text(&buf, 2), "3                   ");
    assert_eq!(row_text(&buf, 3), "                    ");
}

#[test]
fn gutter_highlights_cursor_line_without_selection() {
    let theme = UiTheme::default();
    let mut f = file("one\ntwo\nthree");
    f.buffer.set_cursor(1, 0);
    let (buf, _) = render(&f, &EditorConfig::default(), Rect::new(0, 0, 20, 3));
    assert_eq!(buf[(0, 1)].fg, theme.gutter_active_fg);
    assert_eq!(buf[(0, 0)].fg, theme.gutter_fg);
    assert_eq!(buf[(0, 2)].fg, theme.gutter_fg);
}

#[test]
fn gutter_drops_highlight_while_range_selected() {
    let theme = UiTheme::default();
    let mut f = file("one\ntwo\nthree");
    f.buffer.move_cursor(crate::models::Motion::Down, true);
    assert!(f.buffer.has_selection());
    let (buf, _) = render(&f, &EditorConfig::default(), Rect::new(0, 0, 20, 3));
    for y in 0..3 {
        assert_eq!(buf[(0, y)].fg, theme.gutter_fg);
    }
    assert_eq!(buf[(3, 0)].bg, theme.selection_bg);
    assert_eq!(buf[(3, 1)].bg, ratatui::style::Color::Reset);
}

#[test]
fn view_scrolls_to_keep_cursor_visible() {
    let mut f = file(&(1..=30).map(|n| n.to_string()).collect::<Vec<_>>().join("\n"));
    f.buffer.set_cursor(20, 0);
    let area = Rect::new(0, 0, 10, 5);
    let (buf, layout) = render(&f, &EditorConfig::default(), area);
    assert!(row_text(&buf, 4).starts_with("21  21"));
    assert_eq!(cursor_screen_position(&layout, &f, 4), Some((4, 4)));
}

#[test]
fn long_line_scrolls_horizontally_with_cursor() {
    let mut f = file("abcdefghijklmnopqrstuvwxyz");
    f.buffer.set_cursor(0, 20);
    let area = Rect::new(0, 0, 13, 1);
    let (buf, layout) = render(&f, &EditorConfig::default(), area);
    assert_eq!(row_text(&buf, 0), "1  lmnopqrstu");
    assert_eq!(cursor_screen_position(&layout, &f, 4), Some((12, 0)));
}

#[test]
fn click_places_cursor_by_display_column() {
    let f = file("\tab\nxyz");
    let area = Rect::new(0, 2, 20, 5);
    let layout = compute_editor_layout(area, &f, &EditorConfig::default());

    assert_eq!(hit_test(&layout, &f, 4, 3 + 5, 2), Some((0, 2)));
    assert_eq!(hit_test(&layout, &f, 4, 3, 3), Some((1, 0)));
    assert_eq!(hit_test(&layout, &f, 4, 1, 3), Some((1, 0)));
    assert_eq!(hit_test(&layout, &f, 4, 15, 6), Some((1, 3)));
    assert_eq!(hit_test(&layout, &f, 4, 3, 1), None);
}
