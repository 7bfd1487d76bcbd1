use crate::dns_class::DnsClass;
use thiserror::Error;

/// Invalid registration input. Raised while the router is being built and
/// never on the request path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Empty label in pattern '{0}'")]
    EmptyLabel(String),

    #[error("Parameter without a name in pattern '{0}'")]
    EmptyParameterName(String),

    #[error("Parameter '{name}' declared twice in pattern '{pattern}'")]
    DuplicateParameter { pattern: String, name: String },

    #[error("Label longer than 63 bytes in pattern '{0}'")]
    LabelTooLong(String),

    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),

    #[error("Invalid {record_type} record data '{value}': {reason}")]
    InvalidRecordData {
        record_type: String,
        value: String,
        reason: String,
    },
}

/// The question section of an otherwise well-formed query is not servable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unsupported number of questions in request: {0}")]
    QuestionCount(usize),

    #[error("Unsupported question class: {0}")]
    UnsupportedClass(DnsClass),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Malformed DNS message: {0}")]
    Malformed(String),

    #[error("Failed to encode DNS message: {0}")]
    Encode(String),
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::IoError(e.to_string())
    }
}
