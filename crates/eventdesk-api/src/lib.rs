// eventdesk-api: Async Rust client for the event-operations REST backend.
//
// One `BackendClient` covers every resource collection. Endpoint groups live
// in their own modules as `impl BackendClient` blocks; wire shapes live in
// `types` and stay loosely typed (statuses are plain strings) so that
// `eventdesk-core` owns the domain vocabulary.

pub mod client;
pub mod error;
pub mod retry;
pub mod transport;
pub mod types;

mod alerts;
mod crowd;
mod events;
mod exits;
mod feedback;
mod lost_persons;
mod medical;
mod washrooms;
mod zones;

pub use client::BackendClient;
pub use error::Error;
pub use retry::RetryPolicy;
pub use transport::{TlsMode, TransportConfig};
