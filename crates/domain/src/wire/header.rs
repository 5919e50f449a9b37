//! Message header (RFC 1035 §4.1.1, AD/CD bits from RFC 2535)
//!
//! ```text
//!                                 1  1  1  1  1  1
//!   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      ID                       |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |QR|   Opcode  |AA|TC|RD|RA| Z|AD|CD|   RCODE   |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    QDCOUNT                    |
//! |                    ANCOUNT                    |
//! |                    NSCOUNT                    |
//! |                    ARCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! ```

use super::{read_u16, HEADER_LEN};
use crate::DomainError;

/// Response, recursion desired and available, NOERROR.
pub const FLAGS_RESPONSE_OK: u16 = 0x8180;

/// Response, recursion desired and available, NXDOMAIN.
pub const FLAGS_RESPONSE_NAME_ERROR: u16 = 0x8183;

const QR_MASK: u16 = 0b1000_0000_0000_0000;
const OPCODE_MASK: u16 = 0b0111_1000_0000_0000;
const AA_MASK: u16 = 0b0000_0100_0000_0000;
const TC_MASK: u16 = 0b0000_0010_0000_0000;
const RD_MASK: u16 = 0b0000_0001_0000_0000;
const RA_MASK: u16 = 0b0000_0000_1000_0000;
const Z_MASK: u16 = 0b0000_0000_0100_0000;
const AD_MASK: u16 = 0b0000_0000_0010_0000;
const CD_MASK: u16 = 0b0000_0000_0001_0000;
const RCODE_MASK: u16 = 0b0000_0000_0000_1111;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn decoded_flags(&self) -> Flags {
        decode_flags(self.flags)
    }
}

/// Logical view of the packed flags word. Single-bit fields hold 0 or 1,
/// `opcode` and `response_code` hold 0..=15. Unknown values are carried as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    pub is_response: u8,
    pub opcode: u8,
    pub authoritative: u8,
    pub truncated: u8,
    pub recursion_desired: u8,
    pub recursion_available: u8,
    pub reserved: u8,
    pub authentic_data: u8,
    pub checking_disabled: u8,
    pub response_code: u8,
}

pub fn decode_flags(word: u16) -> Flags {
    Flags {
        is_response: ((word & QR_MASK) >> 15) as u8,
        opcode: ((word & OPCODE_MASK) >> 11) as u8,
        authoritative: ((word & AA_MASK) >> 10) as u8,
        truncated: ((word & TC_MASK) >> 9) as u8,
        recursion_desired: ((word & RD_MASK) >> 8) as u8,
        recursion_available: ((word & RA_MASK) >> 7) as u8,
        reserved: ((word & Z_MASK) >> 6) as u8,
        authentic_data: ((word & AD_MASK) >> 5) as u8,
        checking_disabled: ((word & CD_MASK) >> 4) as u8,
        response_code: (word & RCODE_MASK) as u8,
    }
}

/// Packs `flags` into the 16-bit header word. Each field is masked to its
/// bit width, so out-of-range values cannot bleed into neighbouring fields.
pub fn encode_flags(flags: &Flags) -> u16 {
    ((flags.is_response as u16) << 15) & QR_MASK
        | ((flags.opcode as u16) << 11) & OPCODE_MASK
        | ((flags.authoritative as u16) << 10) & AA_MASK
        | ((flags.truncated as u16) << 9) & TC_MASK
        | ((flags.recursion_desired as u16) << 8) & RD_MASK
        | ((flags.recursion_available as u16) << 7) & RA_MASK
        | ((flags.reserved as u16) << 6) & Z_MASK
        | ((flags.authentic_data as u16) << 5) & AD_MASK
        | ((flags.checking_disabled as u16) << 4) & CD_MASK
        | (flags.response_code as u16) & RCODE_MASK
}

/// Reads the six big-endian header fields from the first 12 bytes of `buf`.
pub fn parse_header(buf: &[u8]) -> Result<Header, DomainError> {
    if buf.len() < HEADER_LEN {
        return Err(DomainError::TruncatedMessage {
            needed: HEADER_LEN,
            available: buf.len(),
        });
    }

    Ok(Header {
        id: read_u16(buf, 0)?,
        flags: read_u16(buf, 2)?,
        question_count: read_u16(buf, 4)?,
        answer_count: read_u16(buf, 6)?,
        authority_count: read_u16(buf, 8)?,
        additional_count: read_u16(buf, 10)?,
    })
}

pub fn compose_header(header: &Header) -> [u8; HEADER_LEN] {
    let mut buf = [0u8; HEADER_LEN];
    buf[0..2].copy_from_slice(&header.id.to_be_bytes());
    buf[2..4].copy_from_slice(&header.flags.to_be_bytes());
    buf[4..6].copy_from_slice(&header.question_count.to_be_bytes());
    buf[6..8].copy_from_slice(&header.answer_count.to_be_bytes());
    buf[8..10].copy_from_slice(&header.authority_count.to_be_bytes());
    buf[10..12].copy_from_slice(&header.additional_count.to_be_bytes());
    buf
}
