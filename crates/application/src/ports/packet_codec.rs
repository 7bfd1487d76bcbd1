use zonemux_domain::{CodecError, ParsedQuery, ResponsePacket};

/// Converts between wire-format DNS messages and the packet structures
/// handlers work with.
pub trait PacketCodec: Send + Sync {
    fn parse(&self, bytes: &[u8]) -> Result<ParsedQuery, CodecError>;

    fn serialize(&self, packet: &ResponsePacket) -> Result<Vec<u8>, CodecError>;
}
