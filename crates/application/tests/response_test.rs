mod helpers;

use helpers::{context, MockResponseSink};
use std::sync::Arc;
use zonemux_application::SendError;
use zonemux_domain::{RecordData, RecordType, ResourceRecord, ResponseCode};

fn record(owner: &str) -> ResourceRecord {
    ResourceRecord::new(owner, 120, RecordData::A("192.0.2.10".parse().unwrap()))
}

#[tokio::test]
async fn test_new_response_echoes_query() {
    let sink = Arc::new(MockResponseSink::new());
    let (_req, res) = context("example.com", RecordType::AAAA, sink);

    let packet = res.packet();
    assert_eq!(packet.id, 0x1234);
    assert!(packet.recursion_desired);
    assert!(!packet.authoritative);
    assert_eq!(packet.rcode, ResponseCode::NoError);
    assert_eq!(packet.questions[0].record_type, RecordType::AAAA);
    assert!(packet.answers.is_empty());
}

#[tokio::test]
async fn test_sections_are_filled_in_order() {
    let sink = Arc::new(MockResponseSink::new());
    let (_req, mut res) = context("example.com", RecordType::A, sink.clone());

    res.answer(record("a.example.com"))
        .answer(record("b.example.com"))
        .authority(record("ns.example.com"))
        .additional(record("glue.example.com"))
        .set_authoritative(true)
        .set_rcode(ResponseCode::NXDomain);
    res.send().await.unwrap();

    let packet = sink.only();
    let answers: Vec<_> = packet.answers.iter().map(|r| r.name.to_string()).collect();
    assert_eq!(answers, vec!["a.example.com", "b.example.com"]);
    assert_eq!(packet.authority.len(), 1);
    assert_eq!(packet.additional.len(), 1);
    assert!(packet.authoritative);
    assert_eq!(packet.rcode, ResponseCode::NXDomain);
}

#[tokio::test]
async fn test_second_send_is_rejected() {
    let sink = Arc::new(MockResponseSink::new());
    let (_req, mut res) = context("example.com", RecordType::A, sink.clone());

    res.send().await.unwrap();
    assert!(matches!(res.send().await, Err(SendError::AlreadySent)));
    assert_eq!(sink.count(), 1);
}

#[tokio::test]
async fn test_mutations_after_send_are_ignored() {
    let sink = Arc::new(MockResponseSink::new());
    let (_req, mut res) = context("example.com", RecordType::A, sink);

    res.send().await.unwrap();
    res.answer(record("late.example.com"))
        .set_rcode(ResponseCode::ServFail)
        .set_recursion_available(true);

    assert!(res.is_sent());
    assert!(res.packet().answers.is_empty());
    assert_eq!(res.packet().rcode, ResponseCode::NoError);
    assert!(!res.packet().recursion_available);
}

#[tokio::test]
async fn test_failed_send_still_counts_as_sent() {
    let sink = Arc::new(MockResponseSink::failing());
    let (_req, mut res) = context("example.com", RecordType::A, sink);

    assert!(matches!(res.send().await, Err(SendError::Sink(_))));
    assert!(res.is_sent());
    assert!(matches!(res.send().await, Err(SendError::AlreadySent)));
}
