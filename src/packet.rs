//! Packet builders and inspectors
//!
//! Builders assemble outgoing datagrams; inspectors read incoming ones
//! directly from the raw bytes, without an intermediate structured form.
//! All functions are pure and stateless.
//!
//! Wire layout:
//!
//! ```text
//! 0..2   protocol marker "BE"
//! 2..6   CRC-32 (little-endian) over bytes 6..
//! 6      framing marker 0xFF
//! 7      type tag
//! 8..    payload (sequence byte first for Command/ServerMessage)
//! ```

use tracing::debug;

use crate::checksum;
use crate::constants::{
    PacketType, FRAMING_OFFSET, MULTIPART_MARKER, PAYLOAD_OFFSET, TYPE_OFFSET,
};
use crate::error::{ProtocolError, Result};
use crate::{FRAMING_MARKER, MIN_PACKET_SIZE, PROTOCOL_MARKER};

/// One protocol datagram, header included. Built fresh per send, never
/// mutated after construction.
pub type Packet = Vec<u8>;

/// Transaction counter correlating a command with its response. Only the
/// low 8 bits go on the wire; wraparound is the caller's responsibility.
pub type Sequence = u32;

/// Multi-part header of a Command response that spans several datagrams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiPart {
    /// Total number of parts in the response
    pub count: u8,
    /// 0-based index of this part
    pub index: u8,
}

/// Build a packet from a payload and type. This is the single point where
/// the header/checksum relationship is established; every other builder
/// funnels through it.
pub fn build_packet(data: &[u8], kind: PacketType) -> Packet {
    let mut body = Vec::with_capacity(2 + data.len());
    body.push(FRAMING_MARKER);
    body.push(kind.to_u8());
    body.extend_from_slice(data);

    let crc = checksum::compute(&body);

    let mut packet = Vec::with_capacity(PROTOCOL_MARKER.len() + 4 + body.len());
    packet.extend_from_slice(&PROTOCOL_MARKER);
    packet.extend_from_slice(&crc.to_le_bytes());
    packet.extend_from_slice(&body);
    packet
}

/// Build a login packet carrying the raw UTF-8 password bytes.
/// No length limit is enforced here; the server may impose one.
pub fn build_login_packet(password: &str) -> Packet {
    build_packet(password.as_bytes(), PacketType::Login)
}

/// Build a command packet. The sequence counter is explicitly truncated to
/// its low 8 bits; the sequence byte lets the receiver correlate the
/// response to this request.
pub fn build_cmd_packet(command: &[u8], seq: Sequence) -> Packet {
    let mut payload = Vec::with_capacity(1 + command.len());
    payload.push(seq as u8);
    payload.extend_from_slice(command);
    build_packet(&payload, PacketType::Command)
}

/// Build a keep-alive packet: an empty command carrying only the sequence
/// byte, sent periodically to prevent session timeout.
pub fn build_keep_alive_packet(seq: Sequence) -> Packet {
    build_packet(&[seq as u8], PacketType::Command)
}

/// Build an acknowledgement for a server message push, so the server stops
/// retransmitting it.
pub fn build_msg_ack_packet(seq: Sequence) -> Packet {
    build_packet(&[seq as u8], PacketType::ServerMessage)
}

/// Verify a received packet: length, protocol marker, embedded checksum,
/// framing marker. Must succeed before the other inspectors are trusted.
pub fn verify(packet: &[u8]) -> Result<()> {
    if packet.len() < MIN_PACKET_SIZE {
        debug!(len = packet.len(), "packet below minimum size");
        return Err(ProtocolError::TooShort {
            expected: MIN_PACKET_SIZE,
            actual: packet.len(),
        });
    }

    if packet[0..2] != PROTOCOL_MARKER {
        debug!("protocol marker mismatch");
        return Err(ProtocolError::InvalidMagic);
    }

    checksum::verify_embedded(packet).inspect_err(|e| debug!(error = %e, "checksum failure"))?;

    if packet[FRAMING_OFFSET] != FRAMING_MARKER {
        debug!("framing marker missing");
        return Err(ProtocolError::MissingFramingMarker);
    }

    Ok(())
}

/// Read the type tag of a packet
pub fn packet_type(packet: &[u8]) -> Result<PacketType> {
    if packet.len() < TYPE_OFFSET + 1 {
        return Err(ProtocolError::TooShort {
            expected: TYPE_OFFSET + 1,
            actual: packet.len(),
        });
    }

    PacketType::from_u8(packet[TYPE_OFFSET])
        .ok_or(ProtocolError::UnknownPacketType(packet[TYPE_OFFSET]))
}

/// Read the sequence number of a Command or ServerMessage packet.
/// Login packets carry none.
pub fn sequence(packet: &[u8]) -> Result<Sequence> {
    let kind = packet_type(packet)?;
    if !kind.has_sequence() {
        return Err(ProtocolError::SequenceNotApplicable(kind));
    }

    if packet.len() < PAYLOAD_OFFSET + 1 {
        return Err(ProtocolError::TooShort {
            expected: PAYLOAD_OFFSET + 1,
            actual: packet.len(),
        });
    }

    Ok(Sequence::from(packet[PAYLOAD_OFFSET]))
}

/// Return the payload after the type byte (and the sequence byte, where the
/// type carries one). For a multi-part Command response the 3-byte
/// multi-part header is still included; use [`multi`] to detect and skip it.
pub fn data(packet: &[u8]) -> Result<&[u8]> {
    let kind = packet_type(packet)?;
    let start = if kind.has_sequence() {
        PAYLOAD_OFFSET + 1
    } else {
        PAYLOAD_OFFSET
    };

    if packet.len() < start {
        return Err(ProtocolError::TooShort {
            expected: start,
            actual: packet.len(),
        });
    }

    Ok(&packet[start..])
}

/// Interpret the result byte of a login response: `0x01` means the server
/// accepted the password, `0x00` means it rejected it.
pub fn verify_login(packet: &[u8]) -> Result<()> {
    if packet.len() < PAYLOAD_OFFSET + 1 {
        return Err(ProtocolError::TooShort {
            expected: PAYLOAD_OFFSET + 1,
            actual: packet.len(),
        });
    }

    match packet[PAYLOAD_OFFSET] {
        0x01 => Ok(()),
        0x00 => Err(ProtocolError::AuthenticationFailed),
        other => Err(ProtocolError::InvalidLoginResponse(other)),
    }
}

/// Detect the multi-part header of a Command response: sentinel byte right
/// after the sequence byte, then total part count, then 0-based part index.
/// Returns `None` for a single-part response (or any packet without the
/// header). Parts may arrive out of order over UDP; buffering them by index
/// until `count` are collected is the transport's job.
pub fn multi(packet: &[u8]) -> Option<MultiPart> {
    if packet.len() < PAYLOAD_OFFSET + 4 {
        return None;
    }
    if packet[TYPE_OFFSET] != PacketType::Command.to_u8() {
        return None;
    }
    if packet[PAYLOAD_OFFSET + 1] != MULTIPART_MARKER {
        return None;
    }

    Some(MultiPart {
        count: packet[PAYLOAD_OFFSET + 2],
        index: packet[PAYLOAD_OFFSET + 3],
    })
}
