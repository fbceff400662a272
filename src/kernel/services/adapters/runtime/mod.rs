//! File reads and writes off the UI thread; each request answers with exactly one `AppMessage`.

mod message;
mod runtime;

pub use message::AppMessage;
pub use runtime::AsyncRuntime;
