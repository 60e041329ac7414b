// Composition root for the employees bounded context.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate and seed the concrete store.
// - Wire the store into the inbound HTTP adapters.

pub mod http;
pub mod state;
