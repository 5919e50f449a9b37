pub mod collector;
pub mod emitter;
pub mod tracing_sink;

pub use collector::{RelayEventCollector, RelayStats, RelayStatsSnapshot};
pub use emitter::ChannelEventSink;
pub use tracing_sink::TracingEventSink;
