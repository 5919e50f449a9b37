mod relay_event_sink;
mod upstream_exchange;

pub use relay_event_sink::{RelayEvent, RelayEventKind, RelayEventSink, RelayOutcome};
pub use upstream_exchange::UpstreamExchange;
