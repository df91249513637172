//! CRC-32 checksumming for packet headers
//!
//! Every packet embeds a little-endian CRC-32 at bytes 2..6, computed over
//! everything that follows it (framing marker, type tag, payload).

use crate::constants::{CHECKSUM_OFFSET, FRAMING_OFFSET};
use crate::error::{ProtocolError, Result};
use crate::MIN_PACKET_SIZE;

/// Compute the CRC-32 checksum of a byte sequence
pub fn compute(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

/// Read the embedded checksum, recompute it over the covered bytes and
/// compare. Length is re-checked so this never indexes out of bounds.
pub fn verify_embedded(packet: &[u8]) -> Result<()> {
    if packet.len() < MIN_PACKET_SIZE {
        return Err(ProtocolError::TooShort {
            expected: MIN_PACKET_SIZE,
            actual: packet.len(),
        });
    }

    let embedded = u32::from_le_bytes([
        packet[CHECKSUM_OFFSET],
        packet[CHECKSUM_OFFSET + 1],
        packet[CHECKSUM_OFFSET + 2],
        packet[CHECKSUM_OFFSET + 3],
    ]);
    let actual = compute(&packet[FRAMING_OFFSET..]);

    if embedded != actual {
        return Err(ProtocolError::ChecksumMismatch {
            expected: embedded,
            actual,
        });
    }

    Ok(())
}
