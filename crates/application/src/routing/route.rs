use super::Handler;
use std::sync::Arc;
use zonemux_domain::{Params, Pattern, RecordType};

/// One registry entry: a compiled pattern and what runs when it matches.
#[derive(Debug, Clone)]
pub struct Route {
    pattern: Pattern,
    handler: Handler,
}

impl Route {
    pub fn new(pattern: Pattern, handler: Handler) -> Self {
        Self { pattern, handler }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Match against the remaining subzone, honoring the entry's mode.
    pub fn matches(
        &self,
        subzone: &[Arc<str>],
        qtype: RecordType,
        in_error_mode: bool,
    ) -> Option<Params> {
        if self.handler.runs_in_error_mode() != in_error_mode {
            return None;
        }
        self.pattern.matches(subzone, qtype)
    }
}
