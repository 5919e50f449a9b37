use dns_relay_application::ports::{RelayEvent, RelayEventKind, RelayEventSink};
use tracing::{debug, info, warn};

/// Writes each relay event as one structured `tracing` record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl RelayEventSink for TracingEventSink {
    fn emit(&self, event: RelayEvent) {
        let domain = event.domain.as_deref().unwrap_or("-");
        let upstream = event.upstream.as_deref().unwrap_or("-");

        match &event.kind {
            RelayEventKind::Answered(outcome) => info!(
                client = %event.client,
                domain,
                query_type = event.query_type,
                outcome = %outcome,
                upstream,
                elapsed_us = event.elapsed_us,
                "DNS query answered"
            ),
            RelayEventKind::Dropped(error) if error.is_codec_error() => debug!(
                client = %event.client,
                domain,
                error = %error,
                elapsed_us = event.elapsed_us,
                "Undecodable DNS request dropped"
            ),
            RelayEventKind::Dropped(error) => warn!(
                client = %event.client,
                domain,
                query_type = event.query_type,
                upstream,
                error = %error,
                elapsed_us = event.elapsed_us,
                "DNS query dropped"
            ),
        }
    }
}
