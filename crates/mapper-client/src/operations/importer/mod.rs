pub mod add;
pub mod delete;
pub mod edit;
pub mod form;
pub mod list;
mod types;

pub use types::{ImporterDescriptor, ImporterInput, ImporterMutationResult, ImporterSetting};
