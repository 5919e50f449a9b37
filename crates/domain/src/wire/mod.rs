//! RFC 1035 wire codec for the subset of DNS messages the relay handles:
//! the fixed header, a single question, and one address answer record.

pub mod header;
pub mod message;
pub mod name;
pub mod question;
pub mod record;

pub use header::{compose_header, decode_flags, encode_flags, parse_header, Flags, Header};
pub use message::{compose_answer_message, compose_header_and_question, compose_raw_answer_message};
pub use name::{compose_name, parse_name};
pub use question::{compose_question, parse_question, parse_request, ParsedRequest, Question};
pub use record::{build_address_answer, ResourceRecord};

use crate::DomainError;

/// Size of the fixed message header.
pub const HEADER_LEN: usize = 12;

/// Classic DNS-over-UDP message ceiling. Larger messages are not handled.
pub const MAX_UDP_MESSAGE_SIZE: usize = 512;

pub(crate) fn read_u16(buf: &[u8], pos: usize) -> Result<u16, DomainError> {
    match buf.get(pos..pos + 2) {
        Some(bytes) => Ok(u16::from_be_bytes([bytes[0], bytes[1]])),
        None => Err(DomainError::TruncatedMessage {
            needed: pos + 2,
            available: buf.len(),
        }),
    }
}
