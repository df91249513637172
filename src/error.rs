//! Protocol error types

use thiserror::Error;

use crate::constants::PacketType;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Packet too short: expected at least {expected}, got {actual}")]
    TooShort { expected: usize, actual: usize },

    #[error("Invalid protocol marker")]
    InvalidMagic,

    #[error("Checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("Missing framing marker")]
    MissingFramingMarker,

    #[error("Unknown packet type: {0:#04x}")]
    UnknownPacketType(u8),

    #[error("Packet type {0:?} carries no sequence number")]
    SequenceNotApplicable(PacketType),

    #[error("Login rejected by server")]
    AuthenticationFailed,

    #[error("Invalid login response byte: {0:#04x}")]
    InvalidLoginResponse(u8),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
