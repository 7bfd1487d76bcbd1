mod helpers;

use helpers::{a_query, frame};
use zonemux_infrastructure::dns::FrameDecoder;

#[test]
fn test_message_split_across_three_chunks() {
    let payload = a_query(1, "www.example.com.");
    let framed = frame(&payload);

    let mut decoder = FrameDecoder::new();
    decoder.push(&framed[..1]);
    assert!(decoder.next_frame().is_none());
    decoder.push(&framed[1..2]);
    assert!(decoder.next_frame().is_none());
    decoder.push(&framed[2..]);

    let decoded = decoder.next_frame().unwrap();
    assert_eq!(&decoded[..], &payload[..]);
    assert!(decoder.next_frame().is_none());
    assert_eq!(decoder.buffered(), 0);
}

#[test]
fn test_two_messages_in_one_chunk() {
    let first = a_query(1, "a.example.com.");
    let second = a_query(2, "b.example.com.");
    let mut stream = frame(&first);
    stream.extend_from_slice(&frame(&second));

    let mut decoder = FrameDecoder::new();
    decoder.push(&stream);

    assert_eq!(&decoder.next_frame().unwrap()[..], &first[..]);
    assert_eq!(&decoder.next_frame().unwrap()[..], &second[..]);
    assert!(decoder.next_frame().is_none());
}

#[test]
fn test_byte_at_a_time_matches_unsplit() {
    let payload = a_query(3, "www.example.com.");
    let framed = frame(&payload);

    let mut decoder = FrameDecoder::new();
    let mut frames = Vec::new();
    for byte in &framed {
        decoder.push(std::slice::from_ref(byte));
        if let Some(f) = decoder.next_frame() {
            frames.push(f);
        }
    }

    assert_eq!(frames.len(), 1);
    assert_eq!(&frames[0][..], &payload[..]);
}

#[test]
fn test_trailing_partial_message_is_held() {
    let first = a_query(1, "a.example.com.");
    let second = frame(&a_query(2, "b.example.com."));
    let mut stream = frame(&first);
    stream.extend_from_slice(&second[..5]);

    let mut decoder = FrameDecoder::new();
    decoder.push(&stream);

    assert!(decoder.next_frame().is_some());
    assert!(decoder.next_frame().is_none());
    assert_eq!(decoder.buffered(), 5);

    decoder.push(&second[5..]);
    assert!(decoder.next_frame().is_some());
}
