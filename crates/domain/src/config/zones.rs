use crate::dns_record::{RecordData, RecordType, RecordTypeFilter};
use crate::errors::ConfigurationError;
use crate::pattern::{MatchMode, Pattern};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A zone sub-router mounted at `name`, answering from static records.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
    /// Dotted name, optional trailing dot. Any other empty label, such as
    /// a leading dot or `a..b`, is rejected.
    pub name: String,

    #[serde(default)]
    pub merge_params: bool,

    #[serde(default)]
    pub records: Vec<StaticRecordConfig>,
}

impl ZoneConfig {
    /// Compile the zone name and every record the way router assembly will,
    /// surfacing the first failure.
    pub fn check(&self) -> Result<(), ConfigurationError> {
        Pattern::compile(&self.name, RecordTypeFilter::Any, MatchMode::Prefix)?;
        for record in &self.records {
            let record_type = RecordType::from_str(&record.record_type)?;
            Pattern::compile(&record.name, record_type.into(), MatchMode::Exact)?;
            RecordData::parse(record_type, &record.value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StaticRecordConfig {
    /// Pattern relative to the zone; empty for the zone apex. Same label
    /// rules as the zone name.
    #[serde(default)]
    pub name: String,

    pub record_type: String,

    pub value: String,

    #[serde(default)]
    pub ttl: Option<u32>,
}

impl StaticRecordConfig {
    pub fn ttl_or_default(&self) -> u32 {
        self.ttl.unwrap_or(300)
    }
}
