use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Truncated message: needed {needed} bytes, only {available} available")]
    TruncatedMessage { needed: usize, available: usize },

    #[error("Malformed domain name: {0}")]
    MalformedName(String),

    #[error("Unsupported compression pointer at offset {offset}")]
    UnsupportedCompression { offset: usize },

    #[error("Domain name too long: {0} octets")]
    NameTooLong(usize),

    #[error("Invalid IPv4 address: {0}")]
    InvalidAddress(String),

    #[error("Upstream exchange failed: {0}")]
    UpstreamExchangeFailed(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// True for errors raised while decoding or encoding wire bytes.
    pub fn is_codec_error(&self) -> bool {
        matches!(
            self,
            DomainError::TruncatedMessage { .. }
                | DomainError::MalformedName(_)
                | DomainError::UnsupportedCompression { .. }
                | DomainError::NameTooLong(_)
        )
    }
}
