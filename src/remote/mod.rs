//! Destination spreadsheet service.
//!
//! Everything that touches the remote side lives here: the A1 addressing
//! scheme, the serde models of the wire contract, the credential provider,
//! the transport seam with its HTTP implementation, and the stateful
//! [`SheetsClient`] that the transfer tasks share.

// Submodule declarations
pub mod addressing;
pub mod api;
pub mod auth;
pub mod client;
pub mod transport;

// Re-exports
pub use addressing::{Range, column_letter};
pub use client::SheetsClient;
pub use transport::{HttpTransport, SheetsTransport};
