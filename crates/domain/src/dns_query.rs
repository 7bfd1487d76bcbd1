use crate::dns_class::DnsClass;
use crate::dns_record::RecordType;
use crate::errors::ValidationError;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Query,
    Status,
    Notify,
    Update,
    Other(u8),
}

impl Opcode {
    pub fn to_u8(&self) -> u8 {
        match self {
            Opcode::Query => 0,
            Opcode::Status => 2,
            Opcode::Notify => 4,
            Opcode::Update => 5,
            Opcode::Other(code) => *code,
        }
    }

    pub fn from_u8(code: u8) -> Self {
        match code {
            0 => Opcode::Query,
            2 => Opcode::Status,
            4 => Opcode::Notify,
            5 => Opcode::Update,
            other => Opcode::Other(other),
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opcode::Query => f.write_str("QUERY"),
            Opcode::Status => f.write_str("STATUS"),
            Opcode::Notify => f.write_str("NOTIFY"),
            Opcode::Update => f.write_str("UPDATE"),
            Opcode::Other(code) => write!(f, "OPCODE{}", code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Presentation form, no trailing dot.
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub class: DnsClass,
}

impl Question {
    pub fn new(name: &str, record_type: RecordType, class: DnsClass) -> Self {
        Self {
            name: Arc::from(name.trim_end_matches('.')),
            record_type,
            class,
        }
    }
}

/// What the codec hands to the server for one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub id: u16,
    pub opcode: Opcode,
    pub recursion_desired: bool,
    pub questions: Vec<Question>,
}

impl ParsedQuery {
    pub fn new(id: u16, question: Question) -> Self {
        Self {
            id,
            opcode: Opcode::Query,
            recursion_desired: true,
            questions: vec![question],
        }
    }

    /// Exactly one question, of class `IN`.
    pub fn validate(&self) -> Result<&Question, ValidationError> {
        let question = match self.questions.as_slice() {
            [question] => question,
            other => return Err(ValidationError::QuestionCount(other.len())),
        };

        if question.class != DnsClass::IN {
            return Err(ValidationError::UnsupportedClass(question.class));
        }

        Ok(question)
    }
}
