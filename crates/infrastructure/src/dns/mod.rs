pub mod events;
pub mod transport;

pub use events::{
    ChannelEventSink, RelayEventCollector, RelayStats, RelayStatsSnapshot, TracingEventSink,
};
pub use transport::UdpTransport;
