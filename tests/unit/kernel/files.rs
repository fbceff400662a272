use super::*;

fn file(path: &str, content: &str) -> OpenedFile {
    OpenedFile::new(PathBuf::from(path), content)
}

fn list_of(paths: &[&str]) -> FileList {
    let mut list = FileList::new();
    for path in paths {
        list.open(file(path, ""));
    }
    list
}

fn names(list: &FileList) -> Vec<&str> {
    list.files().iter().map(|f| f.name.as_str()).collect()
}

fn active_name(list: &FileList) -> Option<&str> {
    list.active().map(|f| f.name.as_str())
}

#[test]
fn new_file_takes_name_from_last_path_component() {
    let f = file("/tmp/project/src/main.rs", "fn main() {}\n");
    assert_eq!(f.name, "main.rs");
    assert!(!f.active);
    assert!(!f.dirty);
    assert_eq!(f.content(), "fn main() {}\n");
    assert_eq!(display_name(Path::new("/")), "/");
}

#[test]
fn empty_list_has_no_active_file() {
    let list = FileList::new();
    assert!(list.is_empty());
    assert!(list.active().is_none());
    assert!(list.invariants_hold());
}

#[test]
fn open_appends_and_activates_only_the_new_file() {
    let mut list = FileList::new();
    assert_eq!(list.open(file("/a.txt", "A")), OpenOutcome::Opened);
    assert_eq!(list.open(file("/b.txt", "B")), OpenOutcome::Opened);

    assert_eq!(names(&list), vec!["a.txt", "b.txt"]);
    assert_eq!(active_name(&list), Some("b.txt"));
    assert!(list.invariants_hold());
}

#[test]
fn reopening_a_path_activates_existing_record_and_keeps_its_content() {
    let mut list = FileList::new();
    list.open(file("/a.txt", "original"));
    list.open(file("/b.txt", ""));
    list.edit(Path::new("/a.txt"), |f| {
        f.buffer.insert_str("edited ");
        f.note_text_change();
    });

    assert_eq!(list.open(file("/a.txt", "from disk")), OpenOutcome::AlreadyOpen);
    assert_eq!(list.len(), 2);
    assert_eq!(active_name(&list), Some("a.txt"));
    let a = list.get(Path::new("/a.txt")).unwrap();
    assert_eq!(a.content(), "edited original");
    assert!(a.dirty);
}

#[test]
fn activate_switches_the_single_active_flag() {
    let mut list = list_of(&["/a.txt", "/b.txt", "/c.txt"]);
    assert!(list.activate(Path::new("/a.txt")));
    assert_eq!(active_name(&list), Some("a.txt"));
    assert_eq!(list.files().iter().filter(|f| f.active).count(), 1);
    assert!(!list.activate(Path::new("/a.txt")));
}

#[test]
fn activate_unknown_path_is_a_no_op() {
    let mut list = list_of(&["/a.txt", "/b.txt"]);
    assert!(!list.activate(Path::new("/missing.txt")));
    assert_eq!(active_name(&list), Some("b.txt"));
}

#[test]
fn close_inactive_keeps_active_file() {
    let mut list = list_of(&["/a.txt", "/b.txt", "/c.txt"]);
    assert!(list.close(Path::new("/a.txt")));
    assert_eq!(names(&list), vec!["b.txt", "c.txt"]);
    assert_eq!(active_name(&list), Some("c.txt"));
}

#[test]
fn close_active_makes_first_remaining_active() {
    let mut list = list_of(&["/a.txt", "/b.txt", "/c.txt"]);
    list.activate(Path::new("/b.txt"));
    assert!(list.close(Path::new("/b.txt")));
    assert_eq!(names(&list), vec!["a.txt", "c.txt"]);
    assert_eq!(active_name(&list), Some("a.txt"));
    assert!(list.invariants_hold());
}

#[test]
fn close_last_file_empties_the_list() {
    let mut list = list_of(&["/a.txt"]);
    assert!(list.close_active());
    assert!(list.is_empty());
    assert!(list.active().is_none());
    assert!(!list.close_active());
}

#[test]
fn close_unknown_path_is_a_no_op() {
    let mut list = list_of(&["/a.txt", "/b.txt"]);
    assert!(!list.close(Path::new("/nope.txt")));
    assert_eq!(list.len(), 2);
}

#[test]
fn next_and_prev_wrap_around() {
    let mut list = list_of(&["/a.txt", "/b.txt", "/c.txt"]);
    assert!(list.activate_next());
    assert_eq!(active_name(&list), Some("a.txt"));
    assert!(list.activate_prev());
    assert_eq!(active_name(&list), Some("c.txt"));
    assert!(list.activate_prev());
    assert_eq!(active_name(&list), Some("b.txt"));

    let mut single = list_of(&["/only.txt"]);
    assert!(!single.activate_next());
    assert!(!single.activate_prev());
}

#[test]
fn edit_is_keyed_by_path() {
    let mut list = list_of(&["/a.txt", "/b.txt"]);
    let out = list.edit(Path::new("/a.txt"), |f| {
        f.buffer.insert_str("hello");
        f.note_text_change();
        f.edit_version
    });
    assert_eq!(out, Some(1));
    assert_eq!(list.get(Path::new("/a.txt")).unwrap().content(), "hello");
    assert_eq!(list.get(Path::new("/b.txt")).unwrap().content(), "");
    assert!(list.edit(Path::new("/zzz.txt"), |_| ()).is_none());
}

#[test]
fn mark_saved_only_clears_matching_version() {
    let mut list = list_of(&["/a.txt"]);
    let path = Path::new("/a.txt");
    list.edit(path, |f| {
        f.buffer.insert_str("x");
        f.note_text_change();
    });
    let saved_version = list.get(path).unwrap().edit_version;
    list.edit(path, |f| {
        f.buffer.insert_str("y");
        f.note_text_change();
    });

    assert!(!list.mark_saved(path, saved_version));
    assert!(list.get(path).unwrap().dirty);

    let current = list.get(path).unwrap().edit_version;
    assert!(list.mark_saved(path, current));
    assert!(!list.get(path).unwrap().dirty);
}

#[test]
fn set_files_drops_duplicate_paths_keeping_first() {
    let mut list = list_of(&["/a.txt"]);
    list.set_files(|mut files| {
        files.push(file("/a.txt", "dup"));
        files
    });
    assert_eq!(list.len(), 1);
    assert_eq!(list.files()[0].content(), "");
    assert!(list.invariants_hold());
}

#[test]
fn set_files_repairs_missing_active_flag() {
    let mut list = list_of(&["/a.txt", "/b.txt"]);
    list.set_files(|mut files| {
        for f in &mut files {
            f.active = false;
        }
        files
    });
    assert_eq!(active_name(&list), Some("a.txt"));
    assert!(list.invariants_hold());
}

#[test]
fn set_files_keeps_last_of_several_active_flags() {
    let mut list = list_of(&["/a.txt", "/b.txt", "/c.txt"]);
    list.set_files(|mut files| {
        for f in &mut files {
            f.active = true;
        }
        files
    });
    assert_eq!(active_name(&list), Some("c.txt"));
    assert!(list.invariants_hold());
}

#[test]
fn follow_cursor_scrolls_window_to_keep_cursor_visible() {
    let mut f = file("/long.txt", &"line\n".repeat(50));
    f.buffer.set_cursor(30, 0);
    assert!(f.follow_cursor(10));
    assert_eq!(f.scroll_top, 21);

    f.buffer.set_cursor(5, 0);
    assert!(f.follow_cursor(10));
    assert_eq!(f.scroll_top, 5);
    assert!(!f.follow_cursor(10));
}

#[test]
fn scroll_by_clamps_to_document() {
    let mut f = file("/s.txt", "a\nb\nc");
    assert!(!f.scroll_by(-3));
    assert!(f.scroll_by(10));
    assert_eq!(f.scroll_top, 2);
}

#[test]
fn scrolling_drags_cursor_into_window() {
    let mut f = file("/long.txt", &"line\n".repeat(50));
    f.buffer.set_cursor(2, 3);
    assert!(f.scroll_by(10));
    assert!(f.keep_cursor_in_window(5));
    assert_eq!(f.buffer.cursor(), (10, 3));

    assert!(f.scroll_by(-8));
    assert!(f.keep_cursor_in_window(5));
    assert_eq!(f.buffer.cursor(), (6, 3));
    assert!(!f.keep_cursor_in_window(5));
}

#[test]
fn tab_session_scenario() {
    let mut list = FileList::new();
    list.open(file("/work/a.txt", "alpha"));
    list.open(file("/work/b.txt", "beta"));
    list.open(file("/work/c.txt", "gamma"));
    assert_eq!(active_name(&list), Some("c.txt"));

    list.activate(Path::new("/work/a.txt"));
    list.edit(Path::new("/work/a.txt"), |f| {
        f.buffer.set_cursor(0, 5);
        f.buffer.insert_str("!");
        f.note_text_change();
    });
    list.close(Path::new("/work/a.txt"));

    assert_eq!(names(&list), vec!["b.txt", "c.txt"]);
    assert_eq!(active_name(&list), Some("b.txt"));
    assert!(list.invariants_hold());

    let mut seen = FxHashSet::default();
    assert!(list.files().iter().all(|f| seen.insert(f.file_path.clone())));
}

use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum TabOp {
    Open(usize),
    Activate(usize),
    Close(usize),
}

fn tab_op() -> impl Strategy<Value = TabOp> {
    // 6 is never opened, so it exercises the absent-path no-ops.
    prop_oneof![
        (0usize..7).prop_map(TabOp::Open),
        (0usize..7).prop_map(TabOp::Activate),
        (0usize..7).prop_map(TabOp::Close),
    ]
}

fn slot_path(slot: usize) -> PathBuf {
    PathBuf::from(format!("/seq/{slot}.txt"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn any_activate_close_sequence_keeps_one_active_unique_file(
        ops in prop::collection::vec(tab_op(), 0..64)
    ) {
        let mut list = FileList::new();
        for slot in 0..5 {
            list.open(OpenedFile::new(slot_path(slot), ""));
        }

        for op in ops {
            let before_active = list.active_path();
            let before_len = list.len();
            match op {
                TabOp::Open(slot) if slot < 6 => {
                    let path = slot_path(slot);
                    let was_open = list.contains(&path);
                    list.open(OpenedFile::new(path.clone(), ""));
                    prop_assert_eq!(list.active_path(), Some(path));
                    prop_assert_eq!(list.len(), before_len + usize::from(!was_open));
                }
                TabOp::Open(_) => {}
                TabOp::Activate(slot) => {
                    let path = slot_path(slot);
                    let present = list.contains(&path);
                    list.activate(&path);
                    if present {
                        prop_assert_eq!(list.active_path(), Some(path));
                    } else {
                        prop_assert_eq!(list.active_path(), before_active);
                    }
                }
                TabOp::Close(slot) => {
                    let path = slot_path(slot);
                    let present = list.contains(&path);
                    let was_active = before_active.as_ref() == Some(&path);
                    list.close(&path);
                    prop_assert!(!list.contains(&path));
                    if !present {
                        prop_assert_eq!(list.len(), before_len);
                        prop_assert_eq!(list.active_path(), before_active);
                    } else if was_active {
                        let first = list.files().first().map(|f| f.file_path.clone());
                        prop_assert_eq!(list.active_path(), first);
                    } else {
                        prop_assert_eq!(list.active_path(), before_active);
                    }
                }
            }
            prop_assert!(list.invariants_hold());
            prop_assert_eq!(list.is_empty(), list.active().is_none());
        }
    }
}
