use dns_relay_application::ports::{RelayEvent, RelayEventSink};
use tokio::sync::mpsc;

/// Hands relay events to a [`RelayEventCollector`](super::RelayEventCollector)
/// task so the request path never waits on logging.
#[derive(Debug, Clone)]
pub struct ChannelEventSink {
    sender: mpsc::UnboundedSender<RelayEvent>,
}

impl ChannelEventSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<RelayEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl RelayEventSink for ChannelEventSink {
    fn emit(&self, event: RelayEvent) {
        // A closed receiver only means the collector has stopped.
        let _ = self.sender.send(event);
    }
}
