use super::message::AppMessage;
use crate::kernel::services::adapters::file::LocalFileProvider;
use crate::kernel::services::ports::FileProvider;
use ropey::Rope;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// 每个请求只回送一条消息：成功或失败
pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    provider: Arc<dyn FileProvider>,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>) -> io::Result<Self> {
        Self::with_provider(tx, Arc::new(LocalFileProvider::new()))
    }

    pub fn with_provider(tx: Sender<AppMessage>, provider: Arc<dyn FileProvider>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self {
            runtime,
            tx,
            provider,
        })
    }

    pub fn load_file(&self, path: PathBuf) {
        let tx = self.tx.clone();
        let provider = Arc::clone(&self.provider);
        self.runtime.spawn(async move {
            let path_for_read = path.clone();
            let result =
                tokio::task::spawn_blocking(move || provider.read_file(&path_for_read)).await;

            let msg = match result {
                Ok(Ok(content)) => AppMessage::FileLoaded { path, content },
                Ok(Err(e)) => AppMessage::FileLoadFailed {
                    path,
                    error: e.to_string(),
                },
                Err(e) => AppMessage::FileLoadFailed {
                    path,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(msg);
        });
    }

    pub fn write_file(&self, path: PathBuf, version: u64, rope: Rope) {
        let tx = self.tx.clone();
        let provider = Arc::clone(&self.provider);
        self.runtime.spawn(async move {
            let path_for_write = path.clone();
            let result =
                tokio::task::spawn_blocking(move || provider.write_file(&path_for_write, &rope))
                    .await;

            let msg = match result {
                Ok(Ok(())) => AppMessage::FileSaved { path, version },
                Ok(Err(e)) => AppMessage::FileSaveFailed {
                    path,
                    error: e.to_string(),
                },
                Err(e) => AppMessage::FileSaveFailed {
                    path,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(msg);
        });
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;
