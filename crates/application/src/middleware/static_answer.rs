use crate::context::{Request, Response};
use crate::routing::{Flow, Middleware};
use async_trait::async_trait;
use std::sync::Arc;
use zonemux_domain::{RecordData, ResourceRecord};

/// Appends fixed records to the answer section, owned by the query name.
#[derive(Debug, Clone)]
pub struct StaticAnswer {
    records: Arc<[RecordData]>,
    ttl: u32,
}

impl StaticAnswer {
    pub fn new(records: Vec<RecordData>, ttl: u32) -> Self {
        Self {
            records: records.into(),
            ttl,
        }
    }

    pub fn single(record: RecordData, ttl: u32) -> Self {
        Self::new(vec![record], ttl)
    }

    pub fn records(&self) -> &[RecordData] {
        &self.records
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }
}

#[async_trait]
impl Middleware for StaticAnswer {
    async fn handle(&self, req: &mut Request, res: &mut Response) -> Flow {
        let owner: Arc<str> = Arc::from(req.qname());
        for data in self.records.iter() {
            res.answer(ResourceRecord::new(Arc::clone(&owner), self.ttl, data.clone()));
        }
        res.set_authoritative(true);
        Flow::next()
    }
}
