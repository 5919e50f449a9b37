use async_trait::async_trait;
use dns_relay_domain::DomainError;

/// Request/reply exchange with the single configured upstream resolver.
///
/// Implementations own retransmission and timeout policy. Transport failures
/// are reported as [`DomainError::UpstreamExchangeFailed`].
#[async_trait]
pub trait UpstreamExchange: Send + Sync {
    async fn exchange(&self, query: &[u8]) -> Result<Vec<u8>, DomainError>;

    /// Human-readable upstream identity, carried on forwarded relay events.
    fn upstream_name(&self) -> String;
}
