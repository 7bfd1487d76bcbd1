pub mod dispatch;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod zones;

pub use dispatch::DispatchConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use zones::{StaticRecordConfig, ZoneConfig};
