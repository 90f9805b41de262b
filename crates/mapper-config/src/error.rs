use std::io;

use thiserror::Error;

/// ConfigProblem is the type of Error that occurred.
#[derive(Error, Debug)]
pub enum ConfigProblem {
    /// DefaultConfigDirNotFound occurs when the default OS config can't be found.
    #[error("Could not determine default OS configuration directory.")]
    DefaultConfigDirNotFound,

    /// NoConfigFound occurs when a global configuration directory can't be found.
    #[error("Could not find a configuration directory at '{0}'.")]
    NoConfigFound(String),

    /// ProfileNotFound occurs when a profile with a specified name can't be found.
    #[error("There is no profile named '{0}'.")]
    ProfileNotFound(String),

    /// NoEndpoint occurs when neither a profile nor the environment names an endpoint.
    #[error("No importer service endpoint is configured for profile '{0}'.")]
    NoEndpoint(String),

    /// InvalidEndpoint occurs when a configured endpoint is not an absolute URL.
    #[error("'{endpoint}' is not a valid endpoint URL: {source}")]
    InvalidEndpoint {
        /// the offending value
        endpoint: String,
        /// the parser failure
        #[source]
        source: url::ParseError,
    },

    /// PathNotUtf8 occurs when a file path that is not valid UTF-8 is encountered
    #[error(transparent)]
    PathNotUtf8(#[from] camino::FromPathBufError),

    /// TomlSerialization occurs when a profile's configuration can't be serialized to a String.
    #[error(transparent)]
    TomlSerialization(#[from] toml::ser::Error),

    /// TomlDeserialization occurs when a profile's configuration can't be deserialized from a String.
    #[error(transparent)]
    TomlDeserialization(#[from] toml::de::Error),

    /// io::Error occurs when any given std::io::Error arises.
    #[error(transparent)]
    IoError(#[from] io::Error),
}
