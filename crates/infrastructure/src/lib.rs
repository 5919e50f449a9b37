//! DNS relay infrastructure: UDP upstream transport, event sinks and the
//! hosts-file loader.
pub mod dns;
pub mod hosts;
