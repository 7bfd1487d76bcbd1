//! DNS over UDP. Each datagram is one complete message; datagrams that fail
//! to decode or validate are dropped without a reply.

use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use zonemux_application::ports::{PacketCodec, ResponseSink};
use zonemux_application::{Nameserver, Protocol};
use zonemux_domain::{DomainError, ResponsePacket};

pub struct UdpServer {
    nameserver: Arc<Nameserver>,
    codec: Arc<dyn PacketCodec>,
    buffer_size: usize,
}

impl UdpServer {
    pub fn new(nameserver: Arc<Nameserver>, codec: Arc<dyn PacketCodec>, buffer_size: usize) -> Self {
        Self {
            nameserver,
            codec,
            buffer_size,
        }
    }

    /// Receive datagrams until `shutdown` fires. Each one is handled on
    /// its own task.
    pub async fn serve(self: Arc<Self>, socket: Arc<UdpSocket>, shutdown: CancellationToken) {
        let mut recv_buf = vec![0u8; self.buffer_size];

        loop {
            let received = tokio::select! {
                _ = shutdown.cancelled() => break,
                received = socket.recv_from(&mut recv_buf) => received,
            };

            match received {
                Ok((n, peer)) => {
                    let datagram: Arc<[u8]> = Arc::from(&recv_buf[..n]);
                    let server = Arc::clone(&self);
                    let socket = Arc::clone(&socket);
                    tokio::spawn(async move {
                        if let Err(e) = server.handle_datagram(&datagram, peer, socket).await {
                            debug!(peer = %peer, error = %e, "Dropping UDP message");
                        }
                    });
                }
                Err(e) => warn!(error = %e, "UDP recv error"),
            }
        }

        info!("UDP listener stopped");
    }

    /// Decode, dispatch and answer one datagram.
    pub async fn handle_datagram(
        &self,
        datagram: &[u8],
        peer: SocketAddr,
        socket: Arc<UdpSocket>,
    ) -> Result<(), DomainError> {
        let query = self.codec.parse(datagram)?;
        let sink: Arc<dyn ResponseSink> = Arc::new(UdpResponder {
            socket,
            peer,
            codec: Arc::clone(&self.codec),
        });
        self.nameserver
            .handle(query, Some(peer), Protocol::Udp, sink)
            .await?;
        Ok(())
    }
}

/// Sends the response back to the datagram's source address.
struct UdpResponder {
    socket: Arc<UdpSocket>,
    peer: SocketAddr,
    codec: Arc<dyn PacketCodec>,
}

#[async_trait]
impl ResponseSink for UdpResponder {
    async fn send(&self, packet: &ResponsePacket) -> Result<(), DomainError> {
        let payload = self.codec.serialize(packet)?;
        let sent = self.socket.send_to(&payload, self.peer).await?;
        debug!(peer = %self.peer, bytes = sent, "UDP response sent");
        Ok(())
    }
}
