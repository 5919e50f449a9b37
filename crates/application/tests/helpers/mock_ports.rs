#![allow(dead_code)]

use async_trait::async_trait;
use dns_relay_application::ports::{RelayEvent, RelayEventSink, UpstreamExchange};
use dns_relay_domain::DomainError;
use std::sync::Mutex;

enum MockReply {
    /// Echo the query back as a response carrying `answers`.
    Answer {
        reply_id: Option<u16>,
        answer_count: u16,
        answers: Vec<u8>,
    },
    Raw(Vec<u8>),
    Fail(String),
}

pub struct MockUpstream {
    reply: MockReply,
    sent: Mutex<Vec<Vec<u8>>>,
}

impl MockUpstream {
    pub fn answering(answer_count: u16, answers: &[u8]) -> Self {
        Self::with_reply(MockReply::Answer {
            reply_id: None,
            answer_count,
            answers: answers.to_vec(),
        })
    }

    pub fn answering_with_id(reply_id: u16, answer_count: u16, answers: &[u8]) -> Self {
        Self::with_reply(MockReply::Answer {
            reply_id: Some(reply_id),
            answer_count,
            answers: answers.to_vec(),
        })
    }

    pub fn raw(bytes: &[u8]) -> Self {
        Self::with_reply(MockReply::Raw(bytes.to_vec()))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(MockReply::Fail(message.to_string()))
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl UpstreamExchange for MockUpstream {
    async fn exchange(&self, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        self.sent.lock().unwrap().push(query.to_vec());

        match &self.reply {
            MockReply::Answer {
                reply_id,
                answer_count,
                answers,
            } => {
                let mut reply = query.to_vec();
                if let Some(id) = reply_id {
                    reply[0..2].copy_from_slice(&id.to_be_bytes());
                }
                reply[2] = 0x81;
                reply[3] = 0x80;
                reply[6..8].copy_from_slice(&answer_count.to_be_bytes());
                reply.extend_from_slice(answers);
                Ok(reply)
            }
            MockReply::Raw(bytes) => Ok(bytes.clone()),
            MockReply::Fail(message) => Err(DomainError::UpstreamExchangeFailed(message.clone())),
        }
    }

    fn upstream_name(&self) -> String {
        "mock-upstream".to_string()
    }
}

#[derive(Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<RelayEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RelayEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl RelayEventSink for RecordingEventSink {
    fn emit(&self, event: RelayEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Raw query packet for `domain` with the given ID and type, class IN.
pub fn query_packet(id: u16, domain: &str, qtype: u16) -> Vec<u8> {
    let mut qname = Vec::with_capacity(domain.len() + 2);
    for label in domain.split('.') {
        qname.push(label.len() as u8);
        qname.extend_from_slice(label.as_bytes());
    }
    qname.push(0x00);
    raw_query_packet(id, &qname, qtype)
}

/// Raw query packet carrying `qname` verbatim (terminator included).
pub fn raw_query_packet(id: u16, qname: &[u8], qtype: u16) -> Vec<u8> {
    let mut buf = Vec::with_capacity(16 + qname.len());
    buf.extend_from_slice(&id.to_be_bytes());
    buf.extend_from_slice(&[0x01, 0x00]); // RD
    buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(qname);
    buf.extend_from_slice(&qtype.to_be_bytes());
    buf.extend_from_slice(&[0x00, 0x01]);
    buf
}
