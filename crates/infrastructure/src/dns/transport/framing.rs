//! DNS-over-TCP framing (RFC 1035 §4.2.2): every message is preceded by
//! its length as a 16-bit big-endian integer.

use bytes::{Buf, Bytes, BytesMut};
use zonemux_domain::CodecError;

const LENGTH_PREFIX: usize = 2;

/// Reassembles length-prefixed messages from arbitrary stream chunks.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    buf: BytesMut,
    expected: Option<usize>,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Pop the next complete payload, if one is buffered.
    pub fn next_frame(&mut self) -> Option<Bytes> {
        let expected = match self.expected {
            Some(len) => len,
            None => {
                if self.buf.len() < LENGTH_PREFIX {
                    return None;
                }
                let len = u16::from_be_bytes([self.buf[0], self.buf[1]]) as usize;
                self.expected = Some(len);
                len
            }
        };

        if self.buf.len() < expected + LENGTH_PREFIX {
            return None;
        }

        self.buf.advance(LENGTH_PREFIX);
        let frame = self.buf.split_to(expected).freeze();
        self.expected = None;
        Some(frame)
    }

    /// Bytes held for a message that has not fully arrived.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }
}

pub fn encode_frame(payload: &[u8]) -> Result<Vec<u8>, CodecError> {
    let len = u16::try_from(payload.len()).map_err(|_| {
        CodecError::Encode(format!(
            "Message of {} bytes exceeds the TCP frame limit",
            payload.len()
        ))
    })?;

    let mut framed = Vec::with_capacity(payload.len() + LENGTH_PREFIX);
    framed.extend_from_slice(&len.to_be_bytes());
    framed.extend_from_slice(payload);
    Ok(framed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waits_for_length_prefix() {
        let mut decoder = FrameDecoder::new();
        decoder.push(&[0x00]);
        assert!(decoder.next_frame().is_none());
        assert_eq!(decoder.buffered(), 1);
    }

    #[test]
    fn test_zero_length_frame() {
        let mut decoder = FrameDecoder::new();
        decoder.push(&[0x00, 0x00, 0x00, 0x01, 0xAA]);
        assert_eq!(decoder.next_frame().unwrap().len(), 0);
        assert_eq!(&decoder.next_frame().unwrap()[..], &[0xAA]);
        assert_eq!(decoder.buffered(), 0);
    }

    #[test]
    fn test_encode_rejects_oversized_payload() {
        assert!(encode_frame(&vec![0u8; 70_000]).is_err());
        assert_eq!(encode_frame(&[1, 2, 3]).unwrap(), vec![0, 3, 1, 2, 3]);
    }
}
