//! BattlEye RCon Protocol Codec
//!
//! Pure packet construction, validation and inspection for the BattlEye
//! RCon wire protocol (UDP). This crate only builds and parses datagrams;
//! socket handling, retransmission and multi-part reassembly belong to the
//! transport layer on top of it.

pub mod checksum;
pub mod constants;
pub mod error;
pub mod packet;

pub use constants::*;
pub use error::{ProtocolError, Result};
pub use packet::{
    build_cmd_packet, build_keep_alive_packet, build_login_packet, build_msg_ack_packet,
    build_packet, data, multi, packet_type, sequence, verify, verify_login, MultiPart, Packet,
    Sequence,
};

/// Protocol marker: "BE" (0x42 0x45), the first two bytes of every packet
pub const PROTOCOL_MARKER: [u8; 2] = [0x42, 0x45];

/// Framing marker separating the header from the type tag
pub const FRAMING_MARKER: u8 = 0xFF;

/// Minimum packet size (marker + checksum + framing marker)
pub const MIN_PACKET_SIZE: usize = 7;
