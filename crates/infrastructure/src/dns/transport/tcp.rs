//! DNS over TCP.
//!
//! One task per connection. Frames are reassembled from the stream and
//! dispatched in arrival order; a frame that fails to decode or validate
//! closes the connection without a response.

use super::framing::{encode_frame, FrameDecoder};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use zonemux_application::ports::{PacketCodec, ResponseSink};
use zonemux_application::{Nameserver, Protocol};
use zonemux_domain::{DomainError, ResponsePacket};

const READ_CHUNK_SIZE: usize = 4096;

pub struct TcpServer {
    nameserver: Arc<Nameserver>,
    codec: Arc<dyn PacketCodec>,
    idle_timeout: Duration,
}

impl TcpServer {
    pub fn new(
        nameserver: Arc<Nameserver>,
        codec: Arc<dyn PacketCodec>,
        idle_timeout: Duration,
    ) -> Self {
        Self {
            nameserver,
            codec,
            idle_timeout,
        }
    }

    /// Accept connections until `shutdown` fires.
    pub async fn serve(self: Arc<Self>, listener: TcpListener, shutdown: CancellationToken) {
        loop {
            let accepted = tokio::select! {
                _ = shutdown.cancelled() => break,
                accepted = listener.accept() => accepted,
            };

            match accepted {
                Ok((stream, peer)) => {
                    if let Err(e) = stream.set_nodelay(true) {
                        debug!(peer = %peer, error = %e, "Failed to set TCP_NODELAY");
                    }
                    let server = Arc::clone(&self);
                    let shutdown = shutdown.child_token();
                    tokio::spawn(async move {
                        server.handle_connection(stream, peer, shutdown).await;
                    });
                }
                Err(e) => warn!(error = %e, "TCP accept failed"),
            }
        }

        info!("TCP listener stopped");
    }

    /// Serve one connection until the peer closes it, no complete message
    /// arrives within the idle timeout, or a message fails to decode.
    pub async fn handle_connection<S>(&self, stream: S, peer: SocketAddr, shutdown: CancellationToken)
    where
        S: AsyncRead + AsyncWrite + Send + Unpin + 'static,
    {
        let (mut reader, writer) = tokio::io::split(stream);
        let responder = Arc::new(TcpResponder {
            writer: Mutex::new(writer),
            codec: Arc::clone(&self.codec),
        });
        let sink: Arc<dyn ResponseSink> = responder.clone();

        let mut decoder = FrameDecoder::new();
        let mut chunk = vec![0u8; READ_CHUNK_SIZE];
        // Only a complete frame extends the connection's lifetime.
        let mut deadline = Instant::now() + self.idle_timeout;

        loop {
            while let Some(frame) = decoder.next_frame() {
                deadline = Instant::now() + self.idle_timeout;
                if let Err(e) = self.dispatch(&frame, peer, &sink).await {
                    debug!(peer = %peer, error = %e, "Closing TCP connection after bad message");
                    responder.close().await;
                    return;
                }
            }

            let read = tokio::select! {
                _ = shutdown.cancelled() => break,
                read = tokio::time::timeout_at(deadline, reader.read(&mut chunk)) => read,
            };

            match read {
                Ok(Ok(0)) => {
                    if decoder.buffered() > 0 {
                        debug!(peer = %peer, pending = decoder.buffered(), "Peer closed mid-message");
                    }
                    break;
                }
                Ok(Ok(n)) => decoder.push(&chunk[..n]),
                Ok(Err(e)) => {
                    debug!(peer = %peer, error = %e, "TCP read failed");
                    break;
                }
                Err(_) => {
                    debug!(
                        peer = %peer,
                        pending = decoder.buffered(),
                        "No complete message within idle timeout, closing"
                    );
                    break;
                }
            }
        }

        responder.close().await;
    }

    async fn dispatch(
        &self,
        frame: &[u8],
        peer: SocketAddr,
        sink: &Arc<dyn ResponseSink>,
    ) -> Result<(), DomainError> {
        let query = self.codec.parse(frame)?;
        self.nameserver
            .handle(query, Some(peer), Protocol::Tcp, Arc::clone(sink))
            .await?;
        Ok(())
    }
}

/// Writes length-prefixed responses back onto the connection.
struct TcpResponder<W> {
    writer: Mutex<W>,
    codec: Arc<dyn PacketCodec>,
}

impl<W> TcpResponder<W>
where
    W: AsyncWrite + Send + Unpin,
{
    async fn close(&self) {
        let mut writer = self.writer.lock().await;
        if let Err(e) = writer.shutdown().await {
            debug!(error = %e, "TCP shutdown failed");
        }
    }
}

#[async_trait]
impl<W> ResponseSink for TcpResponder<W>
where
    W: AsyncWrite + Send + Unpin,
{
    async fn send(&self, packet: &ResponsePacket) -> Result<(), DomainError> {
        let payload = self.codec.serialize(packet)?;
        let framed = encode_frame(&payload)?;

        let mut writer = self.writer.lock().await;
        writer.write_all(&framed).await?;
        writer.flush().await?;
        Ok(())
    }
}
