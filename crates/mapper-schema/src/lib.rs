#![deny(missing_docs)]

//! Turns the form descriptors an importer service hands out into the reduced
//! schema + value pairs a generic JSON-Schema form renderer needs.
//!
//! The service double-encodes its forms: `properties`, `values` and `uiSchema`
//! arrive as JSON text inside the JSON response. [`ImporterForm::decode`] parses
//! them exactly once, and [`project`] keeps only the properties selected by a
//! [`FieldSelector`].

mod error;
mod form;
mod projection;
mod selector;

pub use error::ProjectionError;
pub use form::{FormDescriptor, ImporterForm, JsonObject};
pub use projection::{project, project_descriptor, ProjectedForm, SettingsProjection};
pub use selector::{FieldSelector, SETTINGS_MARKER};
