#![allow(dead_code)]
use zonemux_domain::{
    DnsClass, MatchMode, ParsedQuery, Pattern, Question, RecordType, RecordTypeFilter,
};

pub struct PatternBuilder {
    name: String,
    filter: RecordTypeFilter,
    mode: MatchMode,
}

impl PatternBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            filter: RecordTypeFilter::Any,
            mode: MatchMode::Prefix,
        }
    }

    pub fn typed(mut self, record_type: RecordType) -> Self {
        self.filter = RecordTypeFilter::Only(record_type);
        self.mode = MatchMode::Exact;
        self
    }

    pub fn filter(mut self, filter: RecordTypeFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn exact(mut self) -> Self {
        self.mode = MatchMode::Exact;
        self
    }

    pub fn build(self) -> Pattern {
        Pattern::compile(&self.name, self.filter, self.mode).unwrap()
    }
}

pub struct QueryBuilder {
    id: u16,
    questions: Vec<Question>,
    recursion_desired: bool,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            id: 4242,
            questions: vec![],
            recursion_desired: true,
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn question(mut self, name: &str, record_type: RecordType) -> Self {
        self.questions
            .push(Question::new(name, record_type, DnsClass::IN));
        self
    }

    pub fn question_in_class(mut self, name: &str, record_type: RecordType, class: DnsClass) -> Self {
        self.questions.push(Question::new(name, record_type, class));
        self
    }

    pub fn recursion_desired(mut self, rd: bool) -> Self {
        self.recursion_desired = rd;
        self
    }

    pub fn build(self) -> ParsedQuery {
        ParsedQuery {
            id: self.id,
            opcode: zonemux_domain::Opcode::Query,
            recursion_desired: self.recursion_desired,
            questions: self.questions,
        }
    }
}
