use crate::context::{Request, Response};
use crate::routing::{Flow, Middleware};
use async_trait::async_trait;
use tracing::info;

/// Logs every query it sees and passes it on.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryLogger;

#[async_trait]
impl Middleware for QueryLogger {
    async fn handle(&self, req: &mut Request, _res: &mut Response) -> Flow {
        info!(
            id = req.query().id,
            qname = %req.qname(),
            qtype = %req.qtype(),
            peer = ?req.peer(),
            protocol = %req.protocol(),
            "DNS query received"
        );
        Flow::next()
    }
}
