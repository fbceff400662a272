use ropey::Rope;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Effect {
    LoadFile(PathBuf),
    /// `rope` is a snapshot taken at `version`; the save result echoes it back.
    WriteFile {
        path: PathBuf,
        version: u64,
        rope: Rope,
    },
}
