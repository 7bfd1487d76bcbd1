use crate::context::{Protocol, Request, Response};
use crate::errors::HandlerError;
use crate::ports::ResponseSink;
use crate::routing::{dispatch_scope, Router, ScopeExit};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, warn};
use zonemux_domain::{ParsedQuery, ResponsePacket, ValidationError};

/// Called once per dispatched query, after the response went out.
pub type CompletionCallback =
    Arc<dyn Fn(&Request, &Response, Option<&HandlerError>) + Send + Sync>;

/// The root of the middleware tree.
///
/// Transports hand each parsed query to [`handle`](Self::handle); the root
/// router's scope is dispatched and whatever response was built is sent if
/// no handler sent it already.
pub struct Nameserver {
    root: Arc<Router>,
    on_complete: Option<CompletionCallback>,
}

impl Nameserver {
    pub fn new(root: Router) -> Self {
        Self {
            root: Arc::new(root),
            on_complete: None,
        }
    }

    pub fn with_completion<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Request, &Response, Option<&HandlerError>) + Send + Sync + 'static,
    {
        self.on_complete = Some(Arc::new(callback));
        self
    }

    pub fn router(&self) -> &Router {
        &self.root
    }

    /// Dispatch one query.
    ///
    /// Queries that do not carry exactly one `IN` question are rejected
    /// before any middleware runs. Otherwise the error left pending when the
    /// root scope finished is returned, after it has been logged.
    pub async fn handle(
        &self,
        query: ParsedQuery,
        peer: Option<SocketAddr>,
        protocol: Protocol,
        sink: Arc<dyn ResponseSink>,
    ) -> Result<Option<HandlerError>, ValidationError> {
        let packet = ResponsePacket::for_query(&query);
        let mut req = Request::new(query, peer, protocol)?;
        let mut res = Response::new(packet, sink);

        let unhandled = match dispatch_scope(&self.root, &mut req, &mut res).await {
            ScopeExit::Exhausted(pending) => pending,
            ScopeExit::Host => None,
        };

        if res.is_sent() {
            debug!(qname = %req.qname(), "Response already sent by middleware");
        } else if let Err(e) = res.send().await {
            warn!(
                qname = %req.qname(),
                protocol = %protocol,
                error = %e,
                "Failed to send response"
            );
        }

        if let Some(err) = &unhandled {
            warn!(
                qname = %req.qname(),
                qtype = %req.qtype(),
                error = %err,
                "Unhandled middleware error"
            );
        }

        if let Some(callback) = &self.on_complete {
            callback(&req, &res, unhandled.as_ref());
        }

        Ok(unhandled)
    }
}
