//! Tip service for the explorer's "watchmaker" panel.
//!
//! A [`TipSource`] turns a topic into a short explanation. [`TipTask`] runs
//! requests on a tokio runtime and hands results back to the single-threaded
//! frame loop through [`TipTask::poll`].

mod error;
mod gemini;
mod offline;
mod source;
mod task;
mod topics;

pub use error::TipError;
pub use gemini::{GeminiSource, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use offline::OfflineSource;
pub use source::{TipFuture, TipSource};
pub use task::{TipStatus, TipTask};
pub use topics::{TipTopic, FALLBACK_TIP, GREETING, LOADING_TIP, PRESET_TOPICS};
