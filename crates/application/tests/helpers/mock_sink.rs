use async_trait::async_trait;
use std::sync::Mutex;
use zonemux_application::ports::ResponseSink;
use zonemux_domain::{DomainError, ResponsePacket};

/// Captures every packet handed to it.
#[derive(Default)]
pub struct MockResponseSink {
    sent: Mutex<Vec<ResponsePacket>>,
    should_fail: bool,
}

impl MockResponseSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            should_fail: true,
        }
    }

    pub fn sent(&self) -> Vec<ResponsePacket> {
        self.sent.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn only(&self) -> ResponsePacket {
        let sent = self.sent();
        assert_eq!(sent.len(), 1, "expected exactly one response");
        sent.into_iter().next().unwrap()
    }
}

#[async_trait]
impl ResponseSink for MockResponseSink {
    async fn send(&self, packet: &ResponsePacket) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push(packet.clone());
        if self.should_fail {
            return Err(DomainError::IoError("connection reset".to_string()));
        }
        Ok(())
    }
}
