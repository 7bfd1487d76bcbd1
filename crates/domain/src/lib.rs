//! zonemux domain layer: names, patterns, packets and configuration.
pub mod config;
pub mod dns_class;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod domain_path;
pub mod errors;
pub mod params;
pub mod pattern;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_class::DnsClass;
pub use dns_query::{Opcode, ParsedQuery, Question};
pub use dns_record::{RecordData, RecordType, RecordTypeFilter, ResourceRecord};
pub use dns_response::{ResponseCode, ResponsePacket};
pub use domain_path::DomainPath;
pub use errors::{CodecError, ConfigurationError, DomainError, ValidationError};
pub use params::Params;
pub use pattern::{Label, MatchMode, Pattern};
