use std::future::Future;
use std::pin::Pin;

use crate::error::TipError;

/// Boxed future returned by [`TipSource::explain`].
pub type TipFuture<'a> = Pin<Box<dyn Future<Output = Result<String, TipError>> + Send + 'a>>;

/// Anything that can explain a topic in plain language.
///
/// Object safe so the studio can pick a source at startup and share it as
/// `Arc<dyn TipSource>`.
pub trait TipSource: Send + Sync + 'static {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Produces an explanation for `topic`.
    fn explain<'a>(&'a self, topic: &'a str) -> TipFuture<'a>;
}
