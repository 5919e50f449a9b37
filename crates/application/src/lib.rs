//! DNS relay application layer: ports and the relay decision use case.
pub mod ports;
pub mod use_cases;
