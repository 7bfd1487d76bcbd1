use super::StaticAnswer;
use crate::routing::{Handler, Router};
use std::str::FromStr;
use tracing::debug;
use zonemux_domain::config::ZoneConfig;
use zonemux_domain::{ConfigurationError, RecordData, RecordType};

/// Build a zone router serving the records of one configured zone.
///
/// Every record becomes an exact-match registration for its name and type,
/// in file order.
pub fn static_zone(config: &ZoneConfig) -> Result<Router, ConfigurationError> {
    let mut zone = Router::new().merge_params(config.merge_params);

    for record in &config.records {
        let record_type = RecordType::from_str(&record.record_type)?;
        let data = RecordData::parse(record_type, &record.value)?;
        zone.on(
            record_type,
            &record.name,
            Handler::normal(StaticAnswer::single(data, record.ttl_or_default())),
        )?;
    }

    debug!(zone = %config.name, records = zone.len(), "Built static zone");
    Ok(zone)
}
