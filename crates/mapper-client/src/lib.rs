// #![deny(missing_docs)]

//! GraphQL client for the importer administration API: one typed function per
//! server operation, plus the edit session that ties forms to saves.

mod client;
mod error;

/// Module related to constructing request headers.
pub mod headers;

/// Typed wrappers around every query and mutation the service offers.
pub mod operations;

/// Holds the importer being edited and saves its settings.
pub mod session;

/// Types shared between operations.
pub mod shared;

pub use client::{ClientConfig, ImporterClient};
pub use error::{GatewayError, SessionError};
