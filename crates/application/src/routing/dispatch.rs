//! The dispatch engine.
//!
//! A scope is one pass over one router's entries for one query. Entries are
//! visited in registration order; the first one that matches the current
//! subzone, query type and mode runs, then the scan resumes after it. A
//! nested zone is a scope of its own, driven by the same loop.

use super::{Flow, Handler, Router};
use crate::context::{Request, Response};
use crate::errors::HandlerError;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tracing::{debug, error};
use zonemux_domain::Params;

/// How a scope finished.
#[derive(Debug)]
pub(crate) enum ScopeExit {
    /// Ran out of entries or was left via [`Flow::ExitZone`]; carries the
    /// error still pending at that point. Always `None` once the response
    /// has been sent.
    Exhausted(Option<HandlerError>),
    /// A handler asked to stop dispatch entirely.
    Host,
}

pub(crate) fn dispatch_scope<'a>(
    router: &'a Router,
    req: &'a mut Request,
    res: &'a mut Response,
) -> BoxFuture<'a, ScopeExit> {
    Box::pin(async move {
        let (entry_offset, entry_params) = req.position();
        let base_params = if router.merges_params() {
            entry_params.clone()
        } else {
            Params::new()
        };

        let mut pending: Option<HandlerError> = None;
        let mut routes = router.routes().iter();

        let exit = loop {
            if res.is_sent() {
                // Nothing after a send can change the outcome.
                if let Some(err) = pending.take() {
                    debug!(
                        qname = %req.qname(),
                        error = %err,
                        "Dropping error raised after send"
                    );
                }
                break ScopeExit::Exhausted(None);
            }

            let in_error_mode = pending.is_some();
            let subzone = &req.full_path()[entry_offset..];
            let qtype = req.qtype();
            let matched = routes.by_ref().find_map(|route| {
                route
                    .matches(subzone, qtype, in_error_mode)
                    .map(|captures| (route, captures))
            });
            let Some((route, captures)) = matched else {
                break ScopeExit::Exhausted(pending);
            };

            req.reposition(
                entry_offset + route.pattern().len(),
                base_params.merged_with(&captures),
            );
            debug!(
                qname = %req.qname(),
                pattern = %route.pattern(),
                kind = ?route.handler().kind(),
                "Dispatching"
            );

            let flow = match route.handler() {
                Handler::Normal(middleware) => guarded(middleware.handle(req, res)).await,
                Handler::Error(middleware) => {
                    let Some(err) = pending.take() else {
                        continue;
                    };
                    guarded(middleware.handle_error(err, req, res)).await
                }
                Handler::Zone(zone) => match dispatch_scope(zone, req, res).await {
                    ScopeExit::Exhausted(err) => Flow::Continue(err),
                    ScopeExit::Host => Flow::ExitHost,
                },
            };

            match flow {
                Flow::Continue(next) => pending = next,
                Flow::ExitZone => break ScopeExit::Exhausted(None),
                Flow::ExitHost => break ScopeExit::Host,
            }
        };

        req.reposition(entry_offset, entry_params);
        exit
    })
}

/// Run a handler future, turning a panic into a pending error.
async fn guarded<F>(handler: F) -> Flow
where
    F: Future<Output = Flow>,
{
    match AssertUnwindSafe(handler).catch_unwind().await {
        Ok(flow) => flow,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!(panic = %message, "Middleware panicked");
            Flow::Continue(Some(HandlerError::Panicked(message)))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
