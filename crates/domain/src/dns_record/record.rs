use super::RecordType;
use crate::errors::ConfigurationError;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// Resource-record payloads a handler can put in a response.
///
/// Domain names are kept in presentation form without the trailing dot;
/// the codec turns them into wire names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    NS(Arc<str>),
    CNAME(Arc<str>),
    PTR(Arc<str>),
    MX {
        preference: u16,
        exchange: Arc<str>,
    },
    TXT(Vec<String>),
    SOA {
        mname: Arc<str>,
        rname: Arc<str>,
        serial: u32,
        refresh: i32,
        retry: i32,
        expire: i32,
        minimum: u32,
    },
    SRV {
        priority: u16,
        weight: u16,
        port: u16,
        target: Arc<str>,
    },
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::AAAA(_) => RecordType::AAAA,
            RecordData::NS(_) => RecordType::NS,
            RecordData::CNAME(_) => RecordType::CNAME,
            RecordData::PTR(_) => RecordType::PTR,
            RecordData::MX { .. } => RecordType::MX,
            RecordData::TXT(_) => RecordType::TXT,
            RecordData::SOA { .. } => RecordType::SOA,
            RecordData::SRV { .. } => RecordType::SRV,
        }
    }

    /// Parse presentation-format data as written in a zone config.
    ///
    /// `MX` is `"<preference> <exchange>"`, `SRV` is
    /// `"<priority> <weight> <port> <target>"`, `SOA` is
    /// `"<mname> <rname> <serial> <refresh> <retry> <expire> <minimum>"`.
    /// `TXT` takes the whole value as a single string.
    pub fn parse(record_type: RecordType, value: &str) -> Result<Self, ConfigurationError> {
        let invalid = |reason: &str| ConfigurationError::InvalidRecordData {
            record_type: record_type.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        };
        let fields: Vec<&str> = value.split_whitespace().collect();

        match record_type {
            RecordType::A => value
                .trim()
                .parse::<Ipv4Addr>()
                .map(RecordData::A)
                .map_err(|e| invalid(&e.to_string())),
            RecordType::AAAA => value
                .trim()
                .parse::<Ipv6Addr>()
                .map(RecordData::AAAA)
                .map_err(|e| invalid(&e.to_string())),
            RecordType::NS => single_name(&fields)
                .map(RecordData::NS)
                .ok_or_else(|| invalid("expected one domain name")),
            RecordType::CNAME => single_name(&fields)
                .map(RecordData::CNAME)
                .ok_or_else(|| invalid("expected one domain name")),
            RecordType::PTR => single_name(&fields)
                .map(RecordData::PTR)
                .ok_or_else(|| invalid("expected one domain name")),
            RecordType::TXT => Ok(RecordData::TXT(vec![value.to_string()])),
            RecordType::MX => match fields.as_slice() {
                [preference, exchange] => Ok(RecordData::MX {
                    preference: preference.parse().map_err(|_| invalid("bad preference"))?,
                    exchange: normalize_name(exchange),
                }),
                _ => Err(invalid("expected '<preference> <exchange>'")),
            },
            RecordType::SRV => match fields.as_slice() {
                [priority, weight, port, target] => Ok(RecordData::SRV {
                    priority: priority.parse().map_err(|_| invalid("bad priority"))?,
                    weight: weight.parse().map_err(|_| invalid("bad weight"))?,
                    port: port.parse().map_err(|_| invalid("bad port"))?,
                    target: normalize_name(target),
                }),
                _ => Err(invalid("expected '<priority> <weight> <port> <target>'")),
            },
            RecordType::SOA => match fields.as_slice() {
                [mname, rname, serial, refresh, retry, expire, minimum] => Ok(RecordData::SOA {
                    mname: normalize_name(mname),
                    rname: normalize_name(rname),
                    serial: serial.parse().map_err(|_| invalid("bad serial"))?,
                    refresh: refresh.parse().map_err(|_| invalid("bad refresh"))?,
                    retry: retry.parse().map_err(|_| invalid("bad retry"))?,
                    expire: expire.parse().map_err(|_| invalid("bad expire"))?,
                    minimum: minimum.parse().map_err(|_| invalid("bad minimum"))?,
                }),
                _ => Err(invalid(
                    "expected '<mname> <rname> <serial> <refresh> <retry> <expire> <minimum>'",
                )),
            },
            _ => Err(invalid("record type cannot be served from static data")),
        }
    }
}

fn single_name(fields: &[&str]) -> Option<Arc<str>> {
    match fields {
        [name] => Some(normalize_name(name)),
        _ => None,
    }
}

fn normalize_name(name: &str) -> Arc<str> {
    Arc::from(name.trim_end_matches('.'))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Arc<str>,
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<Arc<str>>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}
