use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DispatchConfig {
    /// Register a final root error handler that answers SERVFAIL for any
    /// error no other handler consumed. Off by default: an unhandled error
    /// is logged and the response goes out as the handlers left it.
    #[serde(default)]
    pub servfail_on_unhandled_error: bool,
}
