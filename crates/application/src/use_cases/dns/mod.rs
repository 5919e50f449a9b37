mod handle_relay_query;

pub use handle_relay_query::{HandleRelayQueryUseCase, RelayResponse};
