mod packet_codec;
mod response_sink;

pub use packet_codec::PacketCodec;
pub use response_sink::ResponseSink;
