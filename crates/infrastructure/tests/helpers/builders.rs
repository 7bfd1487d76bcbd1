use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;
use std::sync::Arc;
use zonemux_application::middleware::{QueryLogger, StaticAnswer};
use zonemux_application::{Handler, Nameserver, Router};
use zonemux_domain::RecordData;

pub struct QueryBuilder {
    id: u16,
    questions: Vec<(String, RecordType, DNSClass)>,
}

impl QueryBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            questions: Vec::new(),
        }
    }

    pub fn question(mut self, name: &str, record_type: RecordType) -> Self {
        self.questions.push((name.to_string(), record_type, DNSClass::IN));
        self
    }

    pub fn question_in_class(mut self, name: &str, record_type: RecordType, class: DNSClass) -> Self {
        self.questions.push((name.to_string(), record_type, class));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut message = Message::new(self.id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        for (name, record_type, class) in self.questions {
            let mut query = Query::new();
            query.set_name(Name::from_str(&name).unwrap());
            query.set_query_type(record_type);
            query.set_query_class(class);
            message.add_query(query);
        }

        let mut buf = Vec::new();
        message.emit(&mut BinEncoder::new(&mut buf)).unwrap();
        buf
    }
}

pub fn a_query(id: u16, name: &str) -> Vec<u8> {
    QueryBuilder::new(id).question(name, RecordType::A).build()
}

pub fn frame(payload: &[u8]) -> Vec<u8> {
    let mut framed = (payload.len() as u16).to_be_bytes().to_vec();
    framed.extend_from_slice(payload);
    framed
}

/// Root logger plus `example.com` answering `A? www` with 123.123.123.123.
pub fn example_nameserver() -> Arc<Nameserver> {
    let mut zone = Router::new();
    zone.a(
        "www",
        Handler::normal(StaticAnswer::single(
            RecordData::A("123.123.123.123".parse().unwrap()),
            300,
        )),
    )
    .unwrap();

    let mut root = Router::new();
    root.use_handler(Handler::normal(QueryLogger));
    root.zone("example.com", zone).unwrap();
    Arc::new(Nameserver::new(root))
}
