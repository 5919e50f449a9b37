//! Domain names as length-prefixed label sequences.
//!
//! `06 67 6f 6f 67 6c 65 03 63 6f 6d 00` ⇄ `"google.com"`.
//!
//! Compression pointers are never decoded here: questions received by the
//! relay carry plain labels, and answer sections are copied through opaquely.

use crate::DomainError;

pub const MAX_LABEL_LEN: usize = 63;

/// Maximum encoded name length, including length octets and the terminator.
pub const MAX_NAME_LEN: usize = 255;

const POINTER_MASK: u8 = 0xC0;

/// Decodes the name starting at `offset`.
///
/// Returns the dotted name (no trailing dot, `""` for the root) and the number
/// of bytes consumed including the zero terminator. The dotted form is lossy,
/// so a received name is re-emitted from its original octets, never from this
/// string.
pub fn parse_name(buf: &[u8], offset: usize) -> Result<(String, usize), DomainError> {
    let mut pos = offset;
    let mut raw: Vec<u8> = Vec::with_capacity(64);

    loop {
        let label_len = match buf.get(pos) {
            Some(&len) => len,
            None => {
                return Err(DomainError::MalformedName(format!(
                    "no terminator before end of buffer (offset {})",
                    offset
                )))
            }
        };

        if label_len == 0 {
            pos += 1;
            break;
        }

        match label_len & POINTER_MASK {
            0 => {}
            POINTER_MASK => return Err(DomainError::UnsupportedCompression { offset: pos }),
            _ => {
                return Err(DomainError::MalformedName(format!(
                    "reserved label type 0x{:02x} at offset {}",
                    label_len, pos
                )))
            }
        }

        let start = pos + 1;
        let end = start + label_len as usize;
        let label = buf.get(start..end).ok_or_else(|| {
            DomainError::MalformedName(format!(
                "label of {} octets at offset {} overruns {}-byte buffer",
                label_len,
                pos,
                buf.len()
            ))
        })?;

        if !raw.is_empty() {
            raw.push(b'.');
        }
        raw.extend_from_slice(label);
        pos = end;
    }

    let name = String::from_utf8_lossy(&raw).into_owned();
    Ok((name, pos - offset))
}

/// Encodes a dotted name into labels plus terminator.
///
/// `""` and `"."` encode as the root name; one trailing dot is accepted.
pub fn compose_name(name: &str) -> Result<Vec<u8>, DomainError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        return Ok(vec![0]);
    }

    let mut bytes = Vec::with_capacity(trimmed.len() + 2);
    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(DomainError::MalformedName(format!(
                "empty label in '{}'",
                name
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::NameTooLong(label.len()));
        }
        bytes.push(label.len() as u8);
        bytes.extend_from_slice(label.as_bytes());
    }
    bytes.push(0);

    if bytes.len() > MAX_NAME_LEN {
        return Err(DomainError::NameTooLong(bytes.len()));
    }

    Ok(bytes)
}
