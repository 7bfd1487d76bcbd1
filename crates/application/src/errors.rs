use std::error::Error as StdError;
use thiserror::Error;
use zonemux_domain::DomainError;

/// The error value carried through a dispatch scope.
///
/// While one is pending only error-handling middleware runs.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("{0}")]
    Message(String),

    #[error("handler panicked: {0}")]
    Panicked(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Other(Box<dyn StdError + Send + Sync>),
}

impl HandlerError {
    pub fn msg(message: impl Into<String>) -> Self {
        HandlerError::Message(message.into())
    }

    pub fn other<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        HandlerError::Other(Box::new(error))
    }
}

impl From<SendError> for HandlerError {
    fn from(error: SendError) -> Self {
        match error {
            SendError::Sink(domain) => HandlerError::Domain(domain),
            already_sent => HandlerError::other(already_sent),
        }
    }
}

#[derive(Debug, Error)]
pub enum SendError {
    #[error("response already sent")]
    AlreadySent,

    #[error("failed to deliver response: {0}")]
    Sink(#[from] DomainError),
}
