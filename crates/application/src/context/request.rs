use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;
use zonemux_domain::{
    DnsClass, DomainPath, Params, ParsedQuery, Question, RecordType, ValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Udp,
    Tcp,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Udp => "udp",
            Protocol::Tcp => "tcp",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-query view handed to every middleware.
///
/// The question fields are fixed for the life of the query. The subzone and
/// params are rewritten by the dispatcher each time a registration matches,
/// and restored when a zone scope is left.
#[derive(Debug)]
pub struct Request {
    query: ParsedQuery,
    question: Question,
    full_path: DomainPath,
    consumed: usize,
    params: Params,
    peer: Option<SocketAddr>,
    protocol: Protocol,
}

impl Request {
    /// Only queries with exactly one `IN` question become requests.
    pub fn new(
        query: ParsedQuery,
        peer: Option<SocketAddr>,
        protocol: Protocol,
    ) -> Result<Self, ValidationError> {
        let question = query.validate()?.clone();
        let full_path = DomainPath::from_name(&question.name);

        Ok(Self {
            query,
            question,
            full_path,
            consumed: 0,
            params: Params::new(),
            peer,
            protocol,
        })
    }

    pub fn query(&self) -> &ParsedQuery {
        &self.query
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn qname(&self) -> &str {
        &self.question.name
    }

    pub fn qtype(&self) -> RecordType {
        self.question.record_type
    }

    pub fn qclass(&self) -> DnsClass {
        self.question.class
    }

    /// Labels of the query name, TLD first.
    pub fn full_path(&self) -> &DomainPath {
        &self.full_path
    }

    /// The labels not yet consumed by enclosing registrations.
    pub fn subzone(&self) -> &[Arc<str>] {
        &self.full_path[self.consumed..]
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn peer(&self) -> Option<SocketAddr> {
        self.peer
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub(crate) fn position(&self) -> (usize, Params) {
        (self.consumed, self.params.clone())
    }

    pub(crate) fn reposition(&mut self, consumed: usize, params: Params) {
        self.consumed = consumed.min(self.full_path.len());
        self.params = params;
    }
}
