use crate::context::{Request, Response};
use crate::errors::HandlerError;
use crate::routing::{ErrorMiddleware, Flow};
use async_trait::async_trait;
use tracing::warn;
use zonemux_domain::ResponseCode;

/// Answers SERVFAIL for any error that reaches it and clears the error.
#[derive(Debug, Default, Clone, Copy)]
pub struct ServFailOnError;

#[async_trait]
impl ErrorMiddleware for ServFailOnError {
    async fn handle_error(
        &self,
        error: HandlerError,
        req: &mut Request,
        res: &mut Response,
    ) -> Flow {
        warn!(qname = %req.qname(), error = %error, "Answering SERVFAIL");
        res.set_rcode(ResponseCode::ServFail);
        Flow::next()
    }
}
