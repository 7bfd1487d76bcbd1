mod dispatch;
mod handler;
mod route;
mod router;

pub(crate) use dispatch::{dispatch_scope, ScopeExit};
pub use handler::{
    error_middleware_fn, middleware_fn, ErrorMiddleware, Flow, Handler, HandlerKind, Middleware,
};
pub use route::Route;
pub use router::Router;
