//! Inbound DNS transports.
//!
//! Both listeners run the same pipeline per message: decode with the
//! configured [`PacketCodec`](zonemux_application::ports::PacketCodec), hand
//! the query to the [`Nameserver`](zonemux_application::Nameserver), and
//! deliver the response through a transport-specific sink. Messages that
//! fail to decode or validate never reach dispatch.

pub mod framing;
pub mod tcp;
pub mod udp;

pub use framing::{encode_frame, FrameDecoder};
pub use tcp::TcpServer;
pub use udp::UdpServer;
