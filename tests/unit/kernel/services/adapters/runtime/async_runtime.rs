use super::*;
use crate::kernel::services::ports::{FileError, FileResult};
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;
use tempfile::tempdir;

const WAIT: Duration = Duration::from_secs(5);

struct DenyingProvider;

impl FileProvider for DenyingProvider {
    fn read_file(&self, path: &Path) -> FileResult<String> {
        Err(FileError::PermissionDenied(path.to_path_buf()))
    }

    fn write_file(&self, path: &Path, _content: &Rope) -> FileResult<()> {
        Err(FileError::PermissionDenied(path.to_path_buf()))
    }
}

#[test]
fn load_file_sends_content_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.txt");
    std::fs::write(&path, "alpha").unwrap();

    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx).unwrap();
    runtime.load_file(path.clone());

    match rx.recv_timeout(WAIT).unwrap() {
        AppMessage::FileLoaded { path: p, content } => {
            assert_eq!(p, path);
            assert_eq!(content, "alpha");
        }
        other => panic!("unexpected message: {other:?}"),
    }
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
}

#[test]
fn load_missing_file_reports_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx).unwrap();
    runtime.load_file(path.clone());

    match rx.recv_timeout(WAIT).unwrap() {
        AppMessage::FileLoadFailed { path: p, error } => {
            assert_eq!(p, path);
            assert!(error.contains("Not found"), "{error}");
        }
        other => panic!("unexpected message: {other:?}"),
    }
}

#[test]
fn provider_errors_are_forwarded() {
    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::with_provider(tx, Arc::new(DenyingProvider)).unwrap();
    runtime.load_file(PathBuf::from("secret.txt"));

    match rx.recv_timeout(WAIT).unwrap() {
        AppMessage::FileLoadFailed { error, .. } => assert!(error.contains("Permission denied")),
        other => panic!("unexpected message: {other:?}"),
    }
}

#[test]
fn write_file_reports_saved_version() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx).unwrap();
    runtime.write_file(path.clone(), 7, Rope::from_str("saved\n"));

    match rx.recv_timeout(WAIT).unwrap() {
        AppMessage::FileSaved { path: p, version } => {
            assert_eq!(p, path);
            assert_eq!(version, 7);
        }
        other => panic!("unexpected message: {other:?}"),
    }
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "saved\n");
}

#[test]
fn write_failure_reports_save_failed() {
    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::with_provider(tx, Arc::new(DenyingProvider)).unwrap();
    runtime.write_file(PathBuf::from("x.txt"), 1, Rope::new());

    match rx.recv_timeout(WAIT).unwrap() {
        AppMessage::FileSaveFailed { path, error } => {
            assert_eq!(path, PathBuf::from("x.txt"));
            assert!(!error.is_empty());
        }
        other => panic!("unexpected message: {other:?}"),
    }
}
