use dns_relay_domain::DomainError;
use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;

/// Which path produced the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelayOutcome {
    /// Answered from the name table.
    Local,
    /// Name mapped to a forbidden address, answered with NXDOMAIN.
    Blocked,
    /// Answer relayed from the upstream resolver.
    Forwarded,
}

impl RelayOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelayOutcome::Local => "LOCAL",
            RelayOutcome::Blocked => "BLOCKED",
            RelayOutcome::Forwarded => "FORWARDED",
        }
    }
}

impl fmt::Display for RelayOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayEventKind {
    Answered(RelayOutcome),
    /// No response was produced for the request.
    Dropped(DomainError),
}

#[derive(Debug, Clone)]
pub struct RelayEvent {
    pub client: SocketAddr,

    /// `None` when the request could not be parsed.
    pub domain: Option<Arc<str>>,

    pub query_type: Option<u16>,

    /// Upstream that was consulted; `None` unless the request was forwarded.
    pub upstream: Option<Arc<str>>,

    pub kind: RelayEventKind,

    pub elapsed_us: u64,
}

impl RelayEvent {
    pub fn outcome(&self) -> Option<RelayOutcome> {
        match self.kind {
            RelayEventKind::Answered(outcome) => Some(outcome),
            RelayEventKind::Dropped(_) => None,
        }
    }

    pub fn is_dropped(&self) -> bool {
        matches!(self.kind, RelayEventKind::Dropped(_))
    }
}

/// Structured observability collaborator injected into the relay engine.
pub trait RelayEventSink: Send + Sync {
    fn emit(&self, event: RelayEvent);
}
