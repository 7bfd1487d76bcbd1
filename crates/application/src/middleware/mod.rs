//! Middleware shipped with the server.
mod query_logger;
mod servfail;
mod static_answer;
mod static_zone;

pub use query_logger::QueryLogger;
pub use servfail::ServFailOnError;
pub use static_answer::StaticAnswer;
pub use static_zone::static_zone;
