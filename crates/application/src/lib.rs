//! zonemux application layer: the middleware registry, the dispatch engine
//! and the per-query request/response context.
pub mod context;
pub mod errors;
pub mod middleware;
pub mod nameserver;
pub mod ports;
pub mod routing;

pub use context::{Protocol, Request, Response};
pub use errors::{HandlerError, SendError};
pub use nameserver::{CompletionCallback, Nameserver};
pub use routing::{
    error_middleware_fn, middleware_fn, ErrorMiddleware, Flow, Handler, HandlerKind, Middleware,
    Route, Router,
};
