use super::Router;
use crate::context::{Request, Response};
use crate::errors::HandlerError;
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::fmt;
use std::sync::Arc;

/// What a middleware tells the dispatcher once it is done.
#[derive(Debug)]
pub enum Flow {
    /// Go on to the next matching registration. `Some` switches the scope
    /// into error mode; `None` leaves it (and clears any pending error).
    Continue(Option<HandlerError>),
    /// Stop the enclosing zone; its parent carries on.
    ExitZone,
    /// Stop dispatch for this query altogether.
    ExitHost,
}

impl Flow {
    pub fn next() -> Self {
        Flow::Continue(None)
    }

    pub fn fail(error: impl Into<HandlerError>) -> Self {
        Flow::Continue(Some(error.into()))
    }
}

#[async_trait]
pub trait Middleware: Send + Sync {
    async fn handle(&self, req: &mut Request, res: &mut Response) -> Flow;
}

#[async_trait]
pub trait ErrorMiddleware: Send + Sync {
    async fn handle_error(
        &self,
        error: HandlerError,
        req: &mut Request,
        res: &mut Response,
    ) -> Flow;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Normal,
    Error,
    Zone,
}

/// Anything that can be registered on a [`Router`].
#[derive(Clone)]
pub enum Handler {
    Normal(Arc<dyn Middleware>),
    Error(Arc<dyn ErrorMiddleware>),
    Zone(Arc<Router>),
}

impl Handler {
    pub fn normal(middleware: impl Middleware + 'static) -> Self {
        Handler::Normal(Arc::new(middleware))
    }

    pub fn error(middleware: impl ErrorMiddleware + 'static) -> Self {
        Handler::Error(Arc::new(middleware))
    }

    pub fn zone(router: Router) -> Self {
        Handler::Zone(Arc::new(router))
    }

    pub fn kind(&self) -> HandlerKind {
        match self {
            Handler::Normal(_) => HandlerKind::Normal,
            Handler::Error(_) => HandlerKind::Error,
            Handler::Zone(_) => HandlerKind::Zone,
        }
    }

    /// Error handlers run only while an error is pending; everything else
    /// (zones included) runs only while none is.
    pub fn runs_in_error_mode(&self) -> bool {
        self.kind() == HandlerKind::Error
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Zone(router) => f.debug_tuple("Zone").field(router).finish(),
            other => f.debug_tuple("Handler").field(&other.kind()).finish(),
        }
    }
}

struct FnMiddleware<F>(F);

#[async_trait]
impl<F> Middleware for FnMiddleware<F>
where
    F: for<'a> Fn(&'a mut Request, &'a mut Response) -> BoxFuture<'a, Flow> + Send + Sync,
{
    async fn handle(&self, req: &mut Request, res: &mut Response) -> Flow {
        (self.0)(req, res).await
    }
}

struct FnErrorMiddleware<F>(F);

#[async_trait]
impl<F> ErrorMiddleware for FnErrorMiddleware<F>
where
    F: for<'a> Fn(HandlerError, &'a mut Request, &'a mut Response) -> BoxFuture<'a, Flow>
        + Send
        + Sync,
{
    async fn handle_error(
        &self,
        error: HandlerError,
        req: &mut Request,
        res: &mut Response,
    ) -> Flow {
        (self.0)(error, req, res).await
    }
}

/// Wrap an async closure as normal middleware.
///
/// ```ignore
/// router.use_handler(middleware_fn(|_req, res| {
///     Box::pin(async move {
///         res.set_authoritative(true);
///         Flow::next()
///     })
/// }));
/// ```
pub fn middleware_fn<F>(f: F) -> Handler
where
    F: for<'a> Fn(&'a mut Request, &'a mut Response) -> BoxFuture<'a, Flow>
        + Send
        + Sync
        + 'static,
{
    Handler::normal(FnMiddleware(f))
}

/// Wrap an async closure as error-handling middleware.
pub fn error_middleware_fn<F>(f: F) -> Handler
where
    F: for<'a> Fn(HandlerError, &'a mut Request, &'a mut Response) -> BoxFuture<'a, Flow>
        + Send
        + Sync
        + 'static,
{
    Handler::error(FnErrorMiddleware(f))
}
