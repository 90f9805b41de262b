use std::fmt::{self, Display};

use serde::Serialize;

/// `MapperErrorCode` contains the error codes associated with specific errors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum MapperErrorCode {
    /// The importer service could not be reached
    E001,
    /// The importer service answered with GraphQL errors
    E002,
    /// The token was rejected or is not a valid header value
    E003,
    /// The response did not have the expected shape
    E004,
    /// The request could not be built or sent
    E005,
    /// No usable profile
    E006,
    /// The configured endpoint is not a URL
    E007,
    /// The importer form could not be decoded
    E008,
    /// A mutation was rejected by the service
    E009,
    /// An edit named a property that is not a setting
    E010,
    /// Save was attempted without a loaded form
    E011,
    /// The configuration directory could not be used
    E012,
    /// A command line argument could not be parsed
    E013,
}

impl Display for MapperErrorCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{self:?}")
    }
}
