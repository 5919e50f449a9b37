use dns_relay_application::ports::{RelayEvent, RelayEventKind, RelayEventSink, RelayOutcome};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// Per-outcome request counters.
#[derive(Debug, Default)]
pub struct RelayStats {
    local: AtomicU64,
    blocked: AtomicU64,
    forwarded: AtomicU64,
    dropped: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelayStatsSnapshot {
    pub local: u64,
    pub blocked: u64,
    pub forwarded: u64,
    pub dropped: u64,
}

impl RelayStatsSnapshot {
    pub fn total(&self) -> u64 {
        self.local + self.blocked + self.forwarded + self.dropped
    }
}

impl RelayStats {
    pub fn record(&self, kind: &RelayEventKind) {
        let counter = match kind {
            RelayEventKind::Answered(RelayOutcome::Local) => &self.local,
            RelayEventKind::Answered(RelayOutcome::Blocked) => &self.blocked,
            RelayEventKind::Answered(RelayOutcome::Forwarded) => &self.forwarded,
            RelayEventKind::Dropped(_) => &self.dropped,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> RelayStatsSnapshot {
        RelayStatsSnapshot {
            local: self.local.load(Ordering::Relaxed),
            blocked: self.blocked.load(Ordering::Relaxed),
            forwarded: self.forwarded.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
        }
    }
}

/// Drains a [`ChannelEventSink`](super::ChannelEventSink) receiver: counts
/// every event, then passes it on to `delegate`.
pub struct RelayEventCollector {
    stats: Arc<RelayStats>,
    delegate: Arc<dyn RelayEventSink>,
}

impl RelayEventCollector {
    pub fn new(delegate: Arc<dyn RelayEventSink>) -> Self {
        Self {
            stats: Arc::new(RelayStats::default()),
            delegate,
        }
    }

    pub fn stats(&self) -> Arc<RelayStats> {
        Arc::clone(&self.stats)
    }

    /// Runs until every sender is dropped.
    pub fn start(
        self,
        mut rx: mpsc::UnboundedReceiver<RelayEvent>,
    ) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            debug!("RelayEventCollector: Starting consumer");

            while let Some(event) = rx.recv().await {
                self.stats.record(&event.kind);
                self.delegate.emit(event);
            }

            let totals = self.stats.snapshot();
            debug!(
                total = totals.total(),
                "RelayEventCollector: Consumer shutting down"
            );
        })
    }
}
