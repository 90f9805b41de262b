use thiserror::Error;

/// ProjectionError is returned when a form descriptor cannot be decoded.
///
/// Decoding is all-or-nothing: no projection is produced from a form that
/// fails here.
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// A double-encoded field did not contain valid JSON.
    #[error("could not parse the '{field}' field of the importer form: {source}")]
    Parse {
        /// Name of the offending field on the wire.
        field: &'static str,
        /// The underlying parser failure.
        #[source]
        source: serde_json::Error,
    },

    /// A double-encoded field held valid JSON that was not an object.
    #[error("expected the '{field}' field of the importer form to hold a JSON object, found {found}")]
    NotAnObject {
        /// Name of the offending field on the wire.
        field: &'static str,
        /// JSON kind that was found instead.
        found: &'static str,
    },
}
