#![cfg_attr(not(test), deny(clippy::panic,))]
#![deny(missing_docs)]

//! Utilities for configuring which importer service the mapper talks to,
//! and with which token.

mod config;
mod error;
mod profile;

pub use config::{Config, DEFAULT_PROFILE};
pub use error::ConfigProblem;

pub use profile::mask_key;
/// Utilities for saving, loading, and deleting configuration profiles.
pub use profile::{Credential, CredentialOrigin, Profile, ResolvedProfile, DEFAULT_TABLE};
