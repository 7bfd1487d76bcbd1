use std::sync::Arc;
use zonemux_application::ports::ResponseSink;
use zonemux_application::{Protocol, Request, Response};
use zonemux_domain::{DnsClass, ParsedQuery, Question, RecordType, ResponsePacket};

pub fn query(name: &str, record_type: RecordType) -> ParsedQuery {
    ParsedQuery::new(0x1234, Question::new(name, record_type, DnsClass::IN))
}

pub fn context(
    name: &str,
    record_type: RecordType,
    sink: Arc<dyn ResponseSink>,
) -> (Request, Response) {
    let query = query(name, record_type);
    let packet = ResponsePacket::for_query(&query);
    let req = Request::new(query, None, Protocol::Udp).unwrap();
    (req, Response::new(packet, sink))
}
