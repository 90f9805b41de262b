pub mod list;
pub mod lookup;
mod types;

pub use types::{
    BundleDescriptor, BundleLookup, BundleMatch, BundleSetting, Subelement, TypeRestriction,
};
