use crate::errors::SendError;
use crate::ports::ResponseSink;
use std::fmt;
use std::sync::Arc;
use tracing::warn;
use zonemux_domain::{ResourceRecord, ResponseCode, ResponsePacket};

/// The response under construction for one query, plus the means to
/// deliver it.
///
/// A response is delivered at most once. After that every mutator is a
/// no-op that logs a warning.
pub struct Response {
    packet: ResponsePacket,
    sink: Arc<dyn ResponseSink>,
    sent: bool,
}

impl Response {
    pub fn new(packet: ResponsePacket, sink: Arc<dyn ResponseSink>) -> Self {
        Self {
            packet,
            sink,
            sent: false,
        }
    }

    pub fn packet(&self) -> &ResponsePacket {
        &self.packet
    }

    pub fn is_sent(&self) -> bool {
        self.sent
    }

    pub fn answer(&mut self, record: ResourceRecord) -> &mut Self {
        if let Some(packet) = self.building("answer") {
            packet.answers.push(record);
        }
        self
    }

    pub fn authority(&mut self, record: ResourceRecord) -> &mut Self {
        if let Some(packet) = self.building("authority") {
            packet.authority.push(record);
        }
        self
    }

    pub fn additional(&mut self, record: ResourceRecord) -> &mut Self {
        if let Some(packet) = self.building("additional") {
            packet.additional.push(record);
        }
        self
    }

    pub fn set_rcode(&mut self, rcode: ResponseCode) -> &mut Self {
        if let Some(packet) = self.building("rcode") {
            packet.rcode = rcode;
        }
        self
    }

    pub fn set_authoritative(&mut self, authoritative: bool) -> &mut Self {
        if let Some(packet) = self.building("aa") {
            packet.authoritative = authoritative;
        }
        self
    }

    pub fn set_recursion_available(&mut self, available: bool) -> &mut Self {
        if let Some(packet) = self.building("ra") {
            packet.recursion_available = available;
        }
        self
    }

    /// Hand the packet to the transport.
    ///
    /// The response counts as sent even when delivery fails, so a second
    /// call always returns [`SendError::AlreadySent`].
    pub async fn send(&mut self) -> Result<(), SendError> {
        if self.sent {
            return Err(SendError::AlreadySent);
        }
        self.sent = true;
        self.sink.send(&self.packet).await?;
        Ok(())
    }

    fn building(&mut self, field: &'static str) -> Option<&mut ResponsePacket> {
        if self.sent {
            warn!(id = self.packet.id, field, "Ignoring change to a response that was already sent");
            return None;
        }
        Some(&mut self.packet)
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("packet", &self.packet)
            .field("sent", &self.sent)
            .finish_non_exhaustive()
    }
}
