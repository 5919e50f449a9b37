use dns_relay_application::use_cases::HandleRelayQueryUseCase;
use dns_relay_domain::wire::MAX_UDP_MESSAGE_SIZE;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, error, info};

/// Serves requests one at a time until the socket fails.
///
/// A request that cannot be answered is logged and gets no response; the
/// loop moves on to the next datagram.
pub async fn start_dns_server(
    bind_addr: String,
    use_case: Arc<HandleRelayQueryUseCase>,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let socket = create_udp_socket(socket_addr)?;

    info!(bind_address = %socket_addr, "DNS relay listening");

    let mut recv_buf = [0u8; MAX_UDP_MESSAGE_SIZE];

    loop {
        let (len, client) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                error!(error = %e, "UDP recv error");
                continue;
            }
        };

        let response = match use_case.execute(&recv_buf[..len], client).await {
            Ok(response) => response,
            Err(e) => {
                debug!(client = %client, error = %e, "No response sent");
                continue;
            }
        };

        if let Err(e) = socket.send_to(&response.bytes, client).await {
            error!(client = %client, error = %e, "Failed to send DNS response");
        }
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
