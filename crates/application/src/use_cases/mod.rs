pub mod dns;

pub use dns::{HandleRelayQueryUseCase, RelayResponse};
