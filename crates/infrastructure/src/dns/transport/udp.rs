//! UDP transport to the upstream resolver (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing) and replies are capped at 512 bytes.
//! Each exchange binds a fresh ephemeral socket, so a late reply to an
//! earlier, timed-out exchange can never be read as the answer to a new one.

use async_trait::async_trait;
use dns_relay_application::ports::UpstreamExchange;
use dns_relay_domain::wire::MAX_UDP_MESSAGE_SIZE;
use dns_relay_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

pub struct UdpTransport {
    server_addr: SocketAddr,
    timeout: Duration,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            server_addr,
            timeout,
        }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }

    async fn recv_from_server(&self, socket: &UdpSocket) -> Result<Vec<u8>, DomainError> {
        let mut recv_buf = vec![0u8; MAX_UDP_MESSAGE_SIZE];

        loop {
            let (bytes_received, from_addr) =
                socket.recv_from(&mut recv_buf).await.map_err(|e| {
                    DomainError::UpstreamExchangeFailed(format!(
                        "Failed to receive UDP response from {}: {}",
                        self.server_addr, e
                    ))
                })?;

            if from_addr != self.server_addr {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "Ignoring UDP datagram from unexpected source"
                );
                continue;
            }

            recv_buf.truncate(bytes_received);
            return Ok(recv_buf);
        }
    }
}

#[async_trait]
impl UpstreamExchange for UdpTransport {
    async fn exchange(&self, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        let socket = UdpSocket::bind(self.bind_addr()).await.map_err(|e| {
            DomainError::UpstreamExchangeFailed(format!("Failed to bind UDP socket: {}", e))
        })?;

        let bytes_sent = tokio::time::timeout(self.timeout, socket.send_to(query, self.server_addr))
            .await
            .map_err(|_| {
                DomainError::UpstreamExchangeFailed(format!(
                    "Timeout sending UDP query to {}",
                    self.server_addr
                ))
            })?
            .map_err(|e| {
                DomainError::UpstreamExchangeFailed(format!(
                    "Failed to send UDP query to {}: {}",
                    self.server_addr, e
                ))
            })?;

        debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

        let reply = tokio::time::timeout(self.timeout, self.recv_from_server(&socket))
            .await
            .map_err(|_| {
                DomainError::UpstreamExchangeFailed(format!(
                    "Timeout waiting for UDP response from {}",
                    self.server_addr
                ))
            })??;

        debug!(
            server = %self.server_addr,
            bytes_received = reply.len(),
            "UDP response received"
        );

        Ok(reply)
    }

    fn upstream_name(&self) -> String {
        format!("udp://{}", self.server_addr)
    }
}
