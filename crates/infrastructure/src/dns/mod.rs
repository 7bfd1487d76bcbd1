pub mod codec;
pub mod transport;

pub use codec::{HickoryCodec, RecordTypeMapper};
pub use transport::{FrameDecoder, TcpServer, UdpServer};
