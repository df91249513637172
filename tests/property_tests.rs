//! Property-based tests using proptest
//!
//! These validate the protocol invariants across randomly generated inputs:
//! build/verify round-trips, checksum sensitivity to single-bit corruption,
//! and sequence-byte truncation.

use battleye_protocol::{
    build_cmd_packet, build_keep_alive_packet, build_msg_ack_packet, build_packet, data, multi,
    packet_type, sequence, verify, MultiPart, PacketType, MULTIPART_MARKER,
};
use proptest::prelude::*;

fn any_packet_type() -> impl Strategy<Value = PacketType> {
    prop_oneof![
        Just(PacketType::Login),
        Just(PacketType::Command),
        Just(PacketType::ServerMessage),
    ]
}

// Property: any built packet verifies and reports its type back
proptest! {
    #[test]
    fn prop_build_verify_roundtrip(
        payload in prop::collection::vec(any::<u8>(), 0..2048),
        kind in any_packet_type(),
    ) {
        let packet = build_packet(&payload, kind);

        prop_assert!(verify(&packet).is_ok());
        prop_assert_eq!(packet_type(&packet).unwrap(), kind);
    }
}

// Property: a Login payload comes back through data() unchanged
proptest! {
    #[test]
    fn prop_login_data_roundtrip(payload in prop::collection::vec(any::<u8>(), 0..2048)) {
        let packet = build_packet(&payload, PacketType::Login);
        prop_assert_eq!(data(&packet).unwrap(), payload.as_slice());
    }
}

// Property: command body and sequence both survive the trip; only the low
// 8 bits of the sequence counter are transmitted
proptest! {
    #[test]
    fn prop_cmd_sequence_roundtrip(
        command in prop::collection::vec(any::<u8>(), 0..512),
        seq in any::<u32>(),
    ) {
        let packet = build_cmd_packet(&command, seq);

        prop_assert!(verify(&packet).is_ok());
        prop_assert_eq!(sequence(&packet).unwrap(), seq & 0xFF);
        prop_assert_eq!(data(&packet).unwrap(), command.as_slice());
    }
}

// Property: flipping any single bit anywhere in a built packet makes
// verify() fail (marker, checksum field and covered bytes alike)
proptest! {
    #[test]
    fn prop_single_bit_flip_fails_verify(
        payload in prop::collection::vec(any::<u8>(), 0..256),
        kind in any_packet_type(),
        bit in any::<usize>(),
    ) {
        let mut packet = build_packet(&payload, kind);
        let bit = bit % (packet.len() * 8);
        packet[bit / 8] ^= 1 << (bit % 8);

        prop_assert!(verify(&packet).is_err());
    }
}

// Property: keep-alive and message-ack both carry exactly the sequence byte
proptest! {
    #[test]
    fn prop_seq_only_packets(seq in any::<u32>()) {
        let keep_alive = build_keep_alive_packet(seq);
        prop_assert_eq!(packet_type(&keep_alive).unwrap(), PacketType::Command);
        prop_assert_eq!(sequence(&keep_alive).unwrap(), seq & 0xFF);
        prop_assert!(data(&keep_alive).unwrap().is_empty());

        let ack = build_msg_ack_packet(seq);
        prop_assert_eq!(packet_type(&ack).unwrap(), PacketType::ServerMessage);
        prop_assert_eq!(sequence(&ack).unwrap(), seq & 0xFF);
    }
}

// Property: the multi-part header is recovered exactly when present
proptest! {
    #[test]
    fn prop_multi_part_detection(
        seq in any::<u8>(),
        count in any::<u8>(),
        index in any::<u8>(),
        body in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let mut payload = vec![seq, MULTIPART_MARKER, count, index];
        payload.extend_from_slice(&body);
        let packet = build_packet(&payload, PacketType::Command);

        prop_assert_eq!(multi(&packet), Some(MultiPart { count, index }));
    }
}

// Property: a command response whose first body byte is not the sentinel is
// always reported as single-part
proptest! {
    #[test]
    fn prop_single_part_detection(
        seq in any::<u8>(),
        body in prop::collection::vec(1u8..=255, 1..256),
    ) {
        let mut payload = vec![seq];
        payload.extend_from_slice(&body);
        let packet = build_packet(&payload, PacketType::Command);

        prop_assert_eq!(multi(&packet), None);
    }
}

// Property: truncated datagrams fail verification without panicking
proptest! {
    #[test]
    fn prop_truncated_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..7)) {
        prop_assert!(verify(&bytes).is_err());
        prop_assert!(packet_type(&bytes).is_err());
        prop_assert!(sequence(&bytes).is_err());
        prop_assert!(data(&bytes).is_err());
    }
}
