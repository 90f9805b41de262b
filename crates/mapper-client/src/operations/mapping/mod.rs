pub mod delete;
pub mod edit;
pub mod list;
pub mod reorder;
mod types;

pub use reorder::ReorderTarget;
pub use types::{MappingList, MappingOption, MappingRule, Refinery, ReorderInput, ReplacementValue};
