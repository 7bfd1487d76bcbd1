use crate::dns_query::{Opcode, ParsedQuery, Question};
use crate::dns_record::ResourceRecord;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseCode {
    #[default]
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
}

impl ResponseCode {
    pub fn to_u8(&self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NXDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
        };
        f.write_str(s)
    }
}

/// The outgoing message handlers build up before it is serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePacket {
    pub id: u16,
    pub opcode: Opcode,
    pub authoritative: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub rcode: ResponseCode,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

impl ResponsePacket {
    /// Echo the id, opcode, RD flag and question section of `query`;
    /// NOERROR with empty record sections.
    pub fn for_query(query: &ParsedQuery) -> Self {
        Self {
            id: query.id,
            opcode: query.opcode,
            authoritative: false,
            recursion_desired: query.recursion_desired,
            recursion_available: false,
            rcode: ResponseCode::NoError,
            questions: query.questions.clone(),
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }
}
