use std::fmt;

use mapper_graphql::GraphQLServiceError;
use mapper_http::HttpServiceError;
use mapper_schema::ProjectionError;
use thiserror::Error;

/// GatewayError represents all possible failures of a single gateway operation.
///
/// Rejections the service reports inside a successful response (the `errors`
/// list of a mutation) are returned data and never show up here.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The request never produced a response.
    #[error("could not reach the importer service: {0}")]
    Http(#[from] HttpServiceError),

    /// The service answered with GraphQL errors.
    #[error("encountered a GraphQL error, the importer service responded with: {msg}")]
    GraphQL {
        /// The error messages, one per line.
        msg: String,
    },

    /// The service refused the configured token.
    #[error("the importer service rejected the configured token")]
    InvalidCredentials,

    /// The response did not contain the field the operation asked for.
    #[error("the response from the importer service did not contain the '{field}' field")]
    MissingField {
        /// Name of the top-level field.
        field: &'static str,
    },

    /// Tried to build a [`http::HeaderMap`] with an invalid header value.
    #[error("invalid header value")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),

    /// The response could not be decoded.
    #[error("could not decode the response from the importer service: {msg}")]
    MalformedResponse {
        /// What went wrong.
        msg: String,
    },

    /// The request could not be assembled.
    #[error("could not build a request for the importer service: {msg}")]
    InvalidRequest {
        /// What went wrong.
        msg: String,
    },

    /// Any other failure of the service stack.
    #[error("the request pipeline failed: {0}")]
    ServiceError(Box<dyn std::error::Error + Send + Sync>),
}

impl<T: Send + Sync + fmt::Debug> From<GraphQLServiceError<T>> for GatewayError {
    fn from(value: GraphQLServiceError<T>) -> Self {
        match value {
            GraphQLServiceError::NoData(errors) if errors.is_empty() => {
                GatewayError::MalformedResponse {
                    msg: "the response contained no data".to_string(),
                }
            }
            GraphQLServiceError::NoData(errors) => GatewayError::GraphQL {
                msg: errors
                    .into_iter()
                    .map(|err| err.message)
                    .collect::<Vec<String>>()
                    .join("\n"),
            },
            GraphQLServiceError::PartialError {
                friendly_errors_detail,
                ..
            } => GatewayError::GraphQL {
                msg: friendly_errors_detail.join("\n"),
            },
            GraphQLServiceError::InvalidCredentials => GatewayError::InvalidCredentials,
            GraphQLServiceError::Serialization(err) => GatewayError::InvalidRequest {
                msg: err.to_string(),
            },
            GraphQLServiceError::Deserialization {
                error, status_code, ..
            } => GatewayError::MalformedResponse {
                msg: format!("{error} (HTTP status {status_code})"),
            },
            GraphQLServiceError::Http(err) => GatewayError::InvalidRequest {
                msg: err.to_string(),
            },
            GraphQLServiceError::InvalidUri(err) => GatewayError::InvalidRequest {
                msg: err.to_string(),
            },
            GraphQLServiceError::UpstreamService(err) => match err.downcast::<HttpServiceError>() {
                Ok(err) => GatewayError::Http(*err),
                Err(err) => GatewayError::ServiceError(err),
            },
        }
    }
}

/// SessionError is returned by the edit session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// A gateway operation failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The importer form could not be decoded.
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// Save was called before any form was loaded.
    #[error("no importer form has been loaded into this session")]
    NothingLoaded,

    /// An edit named a property that is not part of the settings projection.
    #[error("'{key}' is not a setting of this importer")]
    UnknownSetting {
        /// The offending property name.
        key: String,
    },
}
