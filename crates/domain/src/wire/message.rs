use super::header::{compose_header, Header};
use super::question::{compose_question, Question};
use super::record::ResourceRecord;
use crate::DomainError;

/// Header followed by the question: the shared prefix of forwarded queries
/// and of every response the relay produces.
pub fn compose_header_and_question(
    header: &Header,
    question: &Question,
) -> Result<Vec<u8>, DomainError> {
    let question_bytes = compose_question(question)?;
    let mut out = Vec::with_capacity(super::HEADER_LEN + question_bytes.len() + 16);
    out.extend_from_slice(&compose_header(header));
    out.extend_from_slice(&question_bytes);
    Ok(out)
}

pub fn compose_answer_message(
    header: &Header,
    question: &Question,
    record: &ResourceRecord,
) -> Result<Vec<u8>, DomainError> {
    let mut out = compose_header_and_question(header, question)?;
    out.reserve(record.encoded_len());
    record.write_to(&mut out);
    Ok(out)
}

/// Appends `raw` verbatim after the header and question. Used to relay an
/// upstream answer section without reinterpreting it.
pub fn compose_raw_answer_message(
    header: &Header,
    question: &Question,
    raw: &[u8],
) -> Result<Vec<u8>, DomainError> {
    let mut out = compose_header_and_question(header, question)?;
    out.extend_from_slice(raw);
    Ok(out)
}
