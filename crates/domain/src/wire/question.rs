use super::header::{parse_header, Header};
use super::name::{compose_name, parse_name};
use super::{read_u16, HEADER_LEN};
use crate::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Dotted form, used for table lookups and logging. Lossy for labels
    /// holding `.` or non-UTF-8 bytes.
    pub name: String,
    pub query_type: u16,
    pub query_class: u16,
    /// QNAME exactly as received, terminator included. Empty for questions
    /// built from a dotted name.
    pub raw_name: Vec<u8>,
}

impl Question {
    pub fn new(name: impl Into<String>, query_type: u16, query_class: u16) -> Self {
        Self {
            name: name.into(),
            query_type,
            query_class,
            raw_name: Vec::new(),
        }
    }

    /// Wire form of QNAME: the received bytes when present, otherwise the
    /// encoding of `name`.
    pub fn encoded_name(&self) -> Result<Vec<u8>, DomainError> {
        if self.raw_name.is_empty() {
            compose_name(&self.name)
        } else {
            Ok(self.raw_name.clone())
        }
    }
}

/// A request split into its header and first question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    pub header: Header,
    pub question: Question,
    /// Offset of the first byte after the question section.
    pub consumed: usize,
}

/// Parses QNAME, QTYPE and QCLASS starting at `offset`.
///
/// The returned length is the name length plus the 4 fixed octets; the wire
/// format has no explicit question length, so callers need it to find the
/// sections that follow.
pub fn parse_question(buf: &[u8], offset: usize) -> Result<(Question, usize), DomainError> {
    let (name, name_len) = parse_name(buf, offset)?;
    let pos = offset + name_len;
    let query_type = read_u16(buf, pos)?;
    let query_class = read_u16(buf, pos + 2)?;

    Ok((
        Question {
            name,
            query_type,
            query_class,
            raw_name: buf[offset..pos].to_vec(),
        },
        name_len + 4,
    ))
}

/// Writes QNAME, QTYPE and QCLASS. A parsed question is written back with
/// its original QNAME bytes.
pub fn compose_question(question: &Question) -> Result<Vec<u8>, DomainError> {
    let mut bytes = question.encoded_name()?;
    bytes.extend_from_slice(&question.query_type.to_be_bytes());
    bytes.extend_from_slice(&question.query_class.to_be_bytes());
    Ok(bytes)
}

/// Parses the header and the question that follows it at offset 12.
pub fn parse_request(buf: &[u8]) -> Result<ParsedRequest, DomainError> {
    let header = parse_header(buf)?;
    let (question, question_len) = parse_question(buf, HEADER_LEN)?;

    Ok(ParsedRequest {
        header,
        question,
        consumed: HEADER_LEN + question_len,
    })
}
