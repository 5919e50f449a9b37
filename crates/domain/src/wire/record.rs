use crate::DomainError;
use std::net::Ipv4Addr;

/// Compression pointer to offset 12, where the single question's name starts.
pub const QUESTION_NAME_POINTER: [u8; 2] = [0xC0, 0x0C];

/// An answer record as emitted by the relay.
///
/// `name` is always [`QUESTION_NAME_POINTER`]; this encoder is only correct
/// for messages with exactly one question placed directly after the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: [u8; 2],
    pub record_type: u16,
    pub class: u16,
    pub ttl: u32,
    pub rdata_length: u16,
    pub rdata: Vec<u8>,
}

impl ResourceRecord {
    /// Appends NAME, TYPE, CLASS, TTL, RDLENGTH, RDATA to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.name);
        out.extend_from_slice(&self.record_type.to_be_bytes());
        out.extend_from_slice(&self.class.to_be_bytes());
        out.extend_from_slice(&self.ttl.to_be_bytes());
        out.extend_from_slice(&self.rdata_length.to_be_bytes());
        out.extend_from_slice(&self.rdata);
    }

    pub fn encoded_len(&self) -> usize {
        12 + self.rdata.len()
    }
}

/// Builds an address answer from a dotted-decimal IPv4 string.
pub fn build_address_answer(
    record_type: u16,
    class: u16,
    ttl: u32,
    address: &str,
) -> Result<ResourceRecord, DomainError> {
    let ip: Ipv4Addr = address
        .parse()
        .map_err(|_| DomainError::InvalidAddress(address.to_string()))?;
    let rdata = ip.octets().to_vec();

    Ok(ResourceRecord {
        name: QUESTION_NAME_POINTER,
        record_type,
        class,
        ttl,
        rdata_length: rdata.len() as u16,
        rdata,
    })
}
