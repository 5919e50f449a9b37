//! DNS relay domain layer: wire codec, name table, errors and configuration.
pub mod config;
pub mod errors;
pub mod name_table;
pub mod wire;

pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use name_table::{is_forbidden_address, NameTable, FORBIDDEN_ADDRESSES};
pub use wire::{Header, ParsedRequest, Question, ResourceRecord};
