use crate::ports::{RelayEvent, RelayEventKind, RelayEventSink, RelayOutcome, UpstreamExchange};
use dns_relay_domain::wire::header::{FLAGS_RESPONSE_NAME_ERROR, FLAGS_RESPONSE_OK};
use dns_relay_domain::wire::{
    build_address_answer, compose_answer_message, compose_header_and_question,
    compose_raw_answer_message, parse_request, Header, ParsedRequest,
};
use dns_relay_domain::{is_forbidden_address, DomainError, NameTable};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub outcome: RelayOutcome,
    pub bytes: Vec<u8>,
}

/// Relay decision engine.
///
/// Each request ends in exactly one of three paths: local answer, blocked
/// (NXDOMAIN) answer, or forward to upstream. Errors mean no response is sent.
///
/// Answers point at the question name with the fixed `0xC00C` pointer, so
/// only the first question of a request is ever answered or forwarded, and
/// every message built here carries QDCOUNT 1. The question's QNAME bytes
/// are echoed exactly as received.
pub struct HandleRelayQueryUseCase {
    name_table: Arc<NameTable>,
    upstream: Arc<dyn UpstreamExchange>,
    upstream_name: Arc<str>,
    events: Arc<dyn RelayEventSink>,
    local_ttl: u32,
}

impl HandleRelayQueryUseCase {
    pub fn new(
        name_table: Arc<NameTable>,
        upstream: Arc<dyn UpstreamExchange>,
        events: Arc<dyn RelayEventSink>,
        local_ttl: u32,
    ) -> Self {
        let upstream_name = upstream.upstream_name().into();
        Self {
            name_table,
            upstream,
            upstream_name,
            events,
            local_ttl,
        }
    }

    pub async fn execute(
        &self,
        packet: &[u8],
        client: SocketAddr,
    ) -> Result<RelayResponse, DomainError> {
        let start = Instant::now();

        let request = match parse_request(packet) {
            Ok(request) => request,
            Err(e) => {
                self.events.emit(RelayEvent {
                    client,
                    domain: None,
                    query_type: None,
                    upstream: None,
                    kind: RelayEventKind::Dropped(e.clone()),
                    elapsed_us: start.elapsed().as_micros() as u64,
                });
                return Err(e);
            }
        };

        let address = self.name_table.lookup(&request.question.name);
        let result = self.resolve(&request, address).await;

        let kind = match &result {
            Ok(response) => RelayEventKind::Answered(response.outcome),
            Err(e) => RelayEventKind::Dropped(e.clone()),
        };
        self.events.emit(RelayEvent {
            client,
            domain: Some(request.question.name.as_str().into()),
            query_type: Some(request.question.query_type),
            upstream: address.is_none().then(|| Arc::clone(&self.upstream_name)),
            kind,
            elapsed_us: start.elapsed().as_micros() as u64,
        });

        result
    }

    async fn resolve(
        &self,
        request: &ParsedRequest,
        address: Option<&str>,
    ) -> Result<RelayResponse, DomainError> {
        match address {
            None => Ok(RelayResponse {
                outcome: RelayOutcome::Forwarded,
                bytes: self.forward(request).await?,
            }),
            Some(address) if is_forbidden_address(address) => Ok(RelayResponse {
                outcome: RelayOutcome::Blocked,
                bytes: Self::blocked_answer(request)?,
            }),
            Some(address) => Ok(RelayResponse {
                outcome: RelayOutcome::Local,
                bytes: self.local_answer(request, address)?,
            }),
        }
    }

    fn local_answer(&self, request: &ParsedRequest, address: &str) -> Result<Vec<u8>, DomainError> {
        let record = build_address_answer(
            request.question.query_type,
            request.question.query_class,
            self.local_ttl,
            address,
        )?;

        let header = Header {
            id: request.header.id,
            flags: FLAGS_RESPONSE_OK,
            question_count: 1,
            answer_count: 1,
            authority_count: 0,
            additional_count: 0,
        };

        compose_answer_message(&header, &request.question, &record)
    }

    fn blocked_answer(request: &ParsedRequest) -> Result<Vec<u8>, DomainError> {
        let header = Header {
            id: request.header.id,
            flags: FLAGS_RESPONSE_NAME_ERROR,
            question_count: 1,
            answer_count: 0,
            authority_count: 0,
            additional_count: 0,
        };

        compose_header_and_question(&header, &request.question)
    }

    /// Sends the question upstream under `id + 1` and re-frames the reply
    /// under the original ID. The reply's answer sections are copied as-is.
    ///
    /// `id + 1` cannot collide with the client's own ID only while a single
    /// forward is in flight.
    async fn forward(&self, request: &ParsedRequest) -> Result<Vec<u8>, DomainError> {
        let original_id = request.header.id;

        // Only the header and first question are re-encoded, so the counts
        // must not advertise anything else.
        let forwarded = Header {
            id: original_id.wrapping_add(1),
            question_count: 1,
            answer_count: 0,
            authority_count: 0,
            additional_count: 0,
            ..request.header
        };
        let query = compose_header_and_question(&forwarded, &request.question)?;

        let reply = self.upstream.exchange(&query).await?;

        let parsed = parse_request(&reply)?;
        let header = Header {
            id: original_id,
            ..parsed.header
        };

        compose_raw_answer_message(&header, &parsed.question, &reply[parsed.consumed..])
    }
}
