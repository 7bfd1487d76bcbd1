use crate::di::DnsServices;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use zonemux_domain::config::ServerConfig;
use zonemux_infrastructure::dns::{TcpServer, UdpServer};

/// Serve UDP and TCP on `socket_addr` until `shutdown` fires.
pub async fn start_dns_server(
    socket_addr: SocketAddr,
    services: &DnsServices,
    server_config: &ServerConfig,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    info!(bind_address = %socket_addr, "Starting DNS server");

    let udp_socket = Arc::new(create_udp_socket(domain, socket_addr)?);
    let tcp_listener = create_tcp_listener(domain, socket_addr)?;

    let udp_server = Arc::new(UdpServer::new(
        Arc::clone(&services.nameserver),
        Arc::clone(&services.codec),
        server_config.udp_buffer_size,
    ));
    let tcp_server = Arc::new(TcpServer::new(
        Arc::clone(&services.nameserver),
        Arc::clone(&services.codec),
        Duration::from_secs(server_config.tcp_idle_timeout),
    ));

    let mut join_set: JoinSet<()> = JoinSet::new();
    join_set.spawn(udp_server.serve(udp_socket, shutdown.clone()));
    join_set.spawn(tcp_server.serve(tcp_listener, shutdown.clone()));

    info!("DNS server ready on {} (udp+tcp)", socket_addr);

    while let Some(joined) = join_set.join_next().await {
        if let Err(e) = joined {
            error!(error = %e, "DNS listener task failed");
            shutdown.cancel();
        }
    }
    Ok(())
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
