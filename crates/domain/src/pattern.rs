//! Domain-name patterns.
//!
//! A pattern is a dotted name compiled into the same reversed label order as
//! [`DomainPath`](crate::DomainPath). Each label is either a literal, a
//! `:name` parameter that captures the query label, or `*` which matches any
//! single label without capturing.
//!
//! Matching is a single left-to-right scan with no backtracking:
//! - `Prefix` patterns match their own name and every name beneath it.
//! - `Exact` patterns match only names with exactly as many labels.
//! - The empty pattern has length 0 and is the catch-all.

use crate::dns_record::{RecordType, RecordTypeFilter};
use crate::errors::ConfigurationError;
use crate::params::Params;
use std::fmt;
use std::sync::Arc;

const MAX_LABEL_LEN: usize = 63;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Literal(Arc<str>),
    Param(Arc<str>),
    Wildcard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Generic (`use`) registrations: the zone and everything beneath it.
    Prefix,
    /// Per-record-type registrations: leaf names only.
    Exact,
}

#[derive(Debug, Clone)]
pub struct Pattern {
    source: Arc<str>,
    labels: Vec<Label>,
    filter: RecordTypeFilter,
    mode: MatchMode,
}

impl Pattern {
    pub fn compile(
        name: &str,
        filter: RecordTypeFilter,
        mode: MatchMode,
    ) -> Result<Self, ConfigurationError> {
        let trimmed = name.trim();
        let body = trimmed.strip_suffix('.').unwrap_or(trimmed);

        let mut labels = Vec::new();
        if !body.is_empty() {
            for raw in body.split('.') {
                labels.push(compile_label(trimmed, raw, &labels)?);
            }
        }
        labels.reverse();

        Ok(Self {
            source: Arc::from(trimmed),
            labels,
            filter,
            mode,
        })
    }

    /// The empty, untyped prefix pattern.
    pub fn catch_all() -> Self {
        Self {
            source: Arc::from(""),
            labels: Vec::new(),
            filter: RecordTypeFilter::Any,
            mode: MatchMode::Prefix,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Number of labels a successful match strips from the query path.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn filter(&self) -> RecordTypeFilter {
        self.filter
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Match a reversed query path (or the remaining subzone of one).
    ///
    /// Returns the captured parameters, or `None` when the record type,
    /// the length rule, or any literal label disagrees.
    pub fn matches(&self, path: &[Arc<str>], qtype: RecordType) -> Option<Params> {
        if !self.filter.accepts(qtype) {
            return None;
        }

        let length_ok = match self.mode {
            MatchMode::Prefix => path.len() >= self.labels.len(),
            MatchMode::Exact => path.len() == self.labels.len(),
        };
        if !length_ok {
            return None;
        }

        let mut params = Params::new();
        for (label, query_label) in self.labels.iter().zip(path) {
            match label {
                Label::Literal(literal) => {
                    if literal.as_bytes() != query_label.as_bytes() {
                        return None;
                    }
                }
                Label::Param(name) => params.insert(Arc::clone(name), Arc::clone(query_label)),
                Label::Wildcard => {}
            }
        }
        Some(params)
    }
}

fn compile_label(
    pattern: &str,
    raw: &str,
    seen: &[Label],
) -> Result<Label, ConfigurationError> {
    if raw.is_empty() {
        return Err(ConfigurationError::EmptyLabel(pattern.to_string()));
    }
    if raw.len() > MAX_LABEL_LEN {
        return Err(ConfigurationError::LabelTooLong(pattern.to_string()));
    }
    if raw == "*" {
        return Ok(Label::Wildcard);
    }

    match raw.strip_prefix(':') {
        None => Ok(Label::Literal(Arc::from(raw))),
        Some("") => Err(ConfigurationError::EmptyParameterName(pattern.to_string())),
        Some(name) => {
            let duplicate = seen
                .iter()
                .any(|l| matches!(l, Label::Param(existing) if &**existing == name));
            if duplicate {
                return Err(ConfigurationError::DuplicateParameter {
                    pattern: pattern.to_string(),
                    name: name.to_string(),
                });
            }
            Ok(Label::Param(Arc::from(name)))
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.source.is_empty() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.source)
        }
    }
}
