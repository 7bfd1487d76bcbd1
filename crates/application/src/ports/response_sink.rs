use async_trait::async_trait;
use zonemux_domain::{DomainError, ResponsePacket};

/// Where a finished response goes: back to the UDP peer, or length-prefixed
/// onto the TCP stream it arrived on.
#[async_trait]
pub trait ResponseSink: Send + Sync {
    async fn send(&self, packet: &ResponsePacket) -> Result<(), DomainError>;
}
