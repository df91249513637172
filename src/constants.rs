//! Protocol constants and packet type definitions

/// Packet types for BattlEye RCon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PacketType {
    /// Login request (outgoing) / login result (incoming)
    Login = 0x00,

    /// Command, keep-alive (empty command) or command response
    Command = 0x01,

    /// Out-of-band server message push / its acknowledgement
    ServerMessage = 0x02,
}

impl PacketType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(PacketType::Login),
            0x01 => Some(PacketType::Command),
            0x02 => Some(PacketType::ServerMessage),
            _ => None,
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Command and ServerMessage payloads start with a sequence byte;
    /// Login payloads do not.
    pub fn has_sequence(self) -> bool {
        matches!(self, PacketType::Command | PacketType::ServerMessage)
    }
}

/// Sentinel byte that opens the multi-part header of a Command response,
/// placed immediately after the sequence byte (BERConProtocol v2)
pub const MULTIPART_MARKER: u8 = 0x00;

/// Byte offset of the 4-byte little-endian CRC-32 checksum
pub const CHECKSUM_OFFSET: usize = 2;

/// Byte offset of the framing marker; the checksum covers everything
/// from here to the end of the packet
pub const FRAMING_OFFSET: usize = 6;

/// Byte offset of the type tag
pub const TYPE_OFFSET: usize = 7;

/// Byte offset of the payload (sequence byte first, where the type has one)
pub const PAYLOAD_OFFSET: usize = 8;
