use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::error::TipError;
use crate::source::TipSource;
use crate::topics::{FALLBACK_TIP, GREETING, LOADING_TIP};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TipStatus {
    Idle,
    Loading,
}

struct Reply {
    generation: u64,
    result: Result<String, TipError>,
}

/// Owns the tip panel's text and the in-flight request, if any.
///
/// Requests run on the given tokio runtime. Results travel back over a channel
/// and are applied by [`TipTask::poll`] on the caller's thread, so the frame
/// loop never blocks. When requests overlap, only the most recent one is
/// allowed to update the text.
pub struct TipTask {
    handle: Handle,
    source: Arc<dyn TipSource>,
    tx: mpsc::UnboundedSender<Reply>,
    rx: mpsc::UnboundedReceiver<Reply>,
    generation: u64,
    status: TipStatus,
    text: String,
}

impl TipTask {
    pub fn new(handle: Handle, source: Arc<dyn TipSource>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            source,
            tx,
            rx,
            generation: 0,
            status: TipStatus::Idle,
            text: GREETING.to_owned(),
        }
    }

    #[inline]
    pub fn status(&self) -> TipStatus {
        self.status
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.status == TipStatus::Loading
    }

    /// Text to show in the panel right now.
    pub fn text(&self) -> &str {
        match self.status {
            TipStatus::Loading => LOADING_TIP,
            TipStatus::Idle => &self.text,
        }
    }

    #[inline]
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Starts a request for `topic`, superseding any request still in flight.
    pub fn request(&mut self, topic: &str) {
        self.generation += 1;
        self.status = TipStatus::Loading;

        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let topic = topic.to_owned();
        log::info!("tip request #{generation} via {}: {topic:?}", source.name());

        self.handle.spawn(async move {
            let result = source.explain(&topic).await;
            // The task may have been dropped; nothing to deliver to then.
            let _ = tx.send(Reply { generation, result });
        });
    }

    /// Applies any replies that have arrived. Returns `true` when the
    /// visible text changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(reply) = self.rx.try_recv() {
            changed |= self.accept(reply);
        }
        changed
    }

    /// Waits until the latest request has been answered.
    ///
    /// For headless use; the frame loop uses [`TipTask::poll`].
    pub async fn settle(&mut self) {
        while self.is_loading() {
            match self.rx.recv().await {
                Some(reply) => {
                    self.accept(reply);
                }
                None => break,
            }
        }
    }

    fn accept(&mut self, reply: Reply) -> bool {
        if reply.generation != self.generation {
            log::debug!("dropping stale tip reply #{}", reply.generation);
            return false;
        }
        self.text = match reply.result {
            Ok(text) => text,
            Err(e) => {
                log::warn!("{e}");
                FALLBACK_TIP.to_owned()
            }
        };
        self.status = TipStatus::Idle;
        true
    }
}
