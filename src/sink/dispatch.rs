use super::RemoteSink;
use crate::domain::LogEntry;
use tokio::sync::mpsc;

/// Fire-and-forget delivery of entries to a `RemoteSink`.
///
/// The sink lives on a detached task fed by an unbounded channel.
/// `dispatch` never blocks and never fails observably; delivery failures
/// are single-attempt, logged at `warn`, and dropped.
#[derive(Debug, Clone)]
pub struct RemoteDispatcher {
    tx: mpsc::UnboundedSender<LogEntry>,
}

impl RemoteDispatcher {
    /// Spawns the delivery task. Requires a running tokio runtime.
    pub fn spawn<S>(sink: S) -> Self
    where
        S: RemoteSink + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<LogEntry>();

        tokio::spawn(async move {
            while let Some(entry) = rx.recv().await {
                if let Err(e) = sink.deliver(&entry).await {
                    tracing::warn!(error = %e, entry_id = %entry.id, "remote delivery failed");
                }
            }
        });

        Self { tx }
    }

    /// Hands an entry to the delivery task without waiting for the outcome.
    pub fn dispatch(&self, entry: LogEntry) {
        // A closed receiver means the runtime is shutting down; nothing to surface.
        let _ = self.tx.send(entry);
    }
}
