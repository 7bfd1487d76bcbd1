//! Wire codec built on `hickory-proto`.
//!
//! Incoming messages are decoded only as far as the header and question
//! section; outgoing packets are assembled into a hickory `Message` and
//! emitted with a `BinEncoder`.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode as HickoryResponseCode};
use hickory_proto::rr::rdata;
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;
use zonemux_application::ports::PacketCodec;
use zonemux_domain::{
    CodecError, DnsClass, Opcode, ParsedQuery, Question, RecordData, ResourceRecord,
    ResponseCode, ResponsePacket,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct HickoryCodec;

impl HickoryCodec {
    pub fn new() -> Self {
        Self
    }
}

impl PacketCodec for HickoryCodec {
    fn parse(&self, bytes: &[u8]) -> Result<ParsedQuery, CodecError> {
        let message = Message::from_vec(bytes)
            .map_err(|e| CodecError::Malformed(format!("Failed to parse DNS message: {}", e)))?;

        if message.message_type() != MessageType::Query {
            return Err(CodecError::Malformed(
                "Received a response where a query was expected".to_string(),
            ));
        }

        let questions = message
            .queries()
            .iter()
            .map(|query| {
                // ASCII form keeps IDN labels as their `xn--` wire bytes.
                Question::new(
                    &query.name().to_ascii(),
                    RecordTypeMapper::from_hickory(query.query_type()),
                    DnsClass::from_u16(u16::from(query.query_class())),
                )
            })
            .collect();

        Ok(ParsedQuery {
            id: message.id(),
            opcode: Opcode::from_u8(u8::from(message.op_code())),
            recursion_desired: message.recursion_desired(),
            questions,
        })
    }

    fn serialize(&self, packet: &ResponsePacket) -> Result<Vec<u8>, CodecError> {
        let mut message = Message::new(packet.id, MessageType::Response, to_op_code(packet.opcode));
        message.set_authoritative(packet.authoritative);
        message.set_recursion_desired(packet.recursion_desired);
        message.set_recursion_available(packet.recursion_available);
        message.set_response_code(to_response_code(packet.rcode));

        for question in &packet.questions {
            message.add_query(to_query(question)?);
        }
        for record in &packet.answers {
            message.add_answer(to_record(record)?);
        }
        for record in &packet.authority {
            message.add_name_server(to_record(record)?);
        }
        for record in &packet.additional {
            message.add_additional(to_record(record)?);
        }

        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        message
            .emit(&mut encoder)
            .map_err(|e| CodecError::Encode(format!("Failed to serialize DNS message: {}", e)))?;

        Ok(buf)
    }
}

fn to_op_code(opcode: Opcode) -> OpCode {
    match opcode {
        Opcode::Query => OpCode::Query,
        Opcode::Status => OpCode::Status,
        Opcode::Notify => OpCode::Notify,
        Opcode::Update => OpCode::Update,
        Opcode::Other(_) => OpCode::Query,
    }
}

fn to_response_code(rcode: ResponseCode) -> HickoryResponseCode {
    match rcode {
        ResponseCode::NoError => HickoryResponseCode::NoError,
        ResponseCode::FormErr => HickoryResponseCode::FormErr,
        ResponseCode::ServFail => HickoryResponseCode::ServFail,
        ResponseCode::NXDomain => HickoryResponseCode::NXDomain,
        ResponseCode::NotImp => HickoryResponseCode::NotImp,
        ResponseCode::Refused => HickoryResponseCode::Refused,
    }
}

fn wire_name(name: &str) -> Result<Name, CodecError> {
    let fqdn = format!("{}.", name.trim_end_matches('.'));
    Name::from_str(&fqdn).map_err(|e| CodecError::Encode(format!("Invalid name '{}': {}", name, e)))
}

fn to_query(question: &Question) -> Result<Query, CodecError> {
    let mut query = Query::new();
    query.set_name(wire_name(&question.name)?);
    query.set_query_type(RecordTypeMapper::to_hickory(question.record_type));
    query.set_query_class(DNSClass::from(question.class.to_u16()));
    Ok(query)
}

fn to_record(record: &ResourceRecord) -> Result<Record, CodecError> {
    let rdata = match &record.data {
        RecordData::A(ip) => RData::A(rdata::A(*ip)),
        RecordData::AAAA(ip) => RData::AAAA(rdata::AAAA(*ip)),
        RecordData::NS(target) => RData::NS(rdata::NS(wire_name(target)?)),
        RecordData::CNAME(target) => RData::CNAME(rdata::CNAME(wire_name(target)?)),
        RecordData::PTR(target) => RData::PTR(rdata::PTR(wire_name(target)?)),
        RecordData::MX {
            preference,
            exchange,
        } => RData::MX(rdata::MX::new(*preference, wire_name(exchange)?)),
        RecordData::TXT(strings) => RData::TXT(rdata::TXT::new(strings.clone())),
        RecordData::SOA {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        } => RData::SOA(rdata::SOA::new(
            wire_name(mname)?,
            wire_name(rname)?,
            *serial,
            *refresh,
            *retry,
            *expire,
            *minimum,
        )),
        RecordData::SRV {
            priority,
            weight,
            port,
            target,
        } => RData::SRV(rdata::SRV::new(*priority, *weight, *port, wire_name(target)?)),
    };

    Ok(Record::from_rdata(wire_name(&record.name)?, record.ttl, rdata))
}
