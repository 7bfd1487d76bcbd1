mod request;
mod response;

pub use request::{Protocol, Request};
pub use response::Response;
