mod code;
mod suggestion;

pub use code::MapperErrorCode;
pub use suggestion::MapperErrorSuggestion;

use mapper_client::{GatewayError, SessionError};
use mapper_config::ConfigProblem;
use mapper_schema::ProjectionError;
use serde::Serialize;

use crate::error::{InvalidKeyValue, MutationRejected};

/// Metadata contains extra information about specific errors
/// Currently this includes an optional error `Code`
/// and an optional `Suggestion`
#[derive(Default, Serialize, Debug)]
pub struct MapperErrorMetadata {
    // skip serializing for now until we can appropriately strip color codes
    #[serde(skip_serializing)]
    pub suggestion: Option<MapperErrorSuggestion>,
    pub code: Option<MapperErrorCode>,

    // anyhow's debug implementation prints the error cause, most of the time we want this
    // but sometimes the cause is already included in the error's Display impl
    #[serde(skip_serializing)]
    pub skip_printing_cause: bool,
}

/// `Metadata` structs can be created from an `anyhow::Error`
/// This works by downcasting the errors to their underlying types
/// and creating `Suggestion`s and `Code`s where applicable
impl From<&mut anyhow::Error> for MapperErrorMetadata {
    fn from(error: &mut anyhow::Error) -> Self {
        if let Some(SessionError::Gateway(gateway_error)) = error.downcast_ref::<SessionError>() {
            return from_gateway_error(gateway_error);
        }
        if let Some(gateway_error) = error.downcast_ref::<GatewayError>() {
            return from_gateway_error(gateway_error);
        }

        if let Some(session_error) = error.downcast_ref::<SessionError>() {
            let (suggestion, code) = match session_error {
                SessionError::Gateway(_) => (None, None),
                SessionError::Projection(_) => (
                    Some(MapperErrorSuggestion::CheckServiceVersion),
                    Some(MapperErrorCode::E008),
                ),
                SessionError::NothingLoaded => (
                    Some(MapperErrorSuggestion::SubmitIssue),
                    Some(MapperErrorCode::E011),
                ),
                SessionError::UnknownSetting { .. } => (
                    Some(MapperErrorSuggestion::ShowSettings),
                    Some(MapperErrorCode::E010),
                ),
            };
            return MapperErrorMetadata {
                suggestion,
                code,
                skip_printing_cause: true,
            };
        }

        if error.downcast_ref::<ProjectionError>().is_some() {
            return MapperErrorMetadata {
                suggestion: Some(MapperErrorSuggestion::CheckServiceVersion),
                code: Some(MapperErrorCode::E008),
                skip_printing_cause: false,
            };
        }

        if let Some(config_problem) = error.downcast_ref::<ConfigProblem>() {
            let (suggestion, code) = match config_problem {
                ConfigProblem::ProfileNotFound(profile) | ConfigProblem::NoEndpoint(profile) => (
                    Some(MapperErrorSuggestion::ConfigureProfile {
                        profile: profile.clone(),
                    }),
                    Some(MapperErrorCode::E006),
                ),
                ConfigProblem::InvalidEndpoint { .. } => (
                    Some(MapperErrorSuggestion::CheckEndpoint),
                    Some(MapperErrorCode::E007),
                ),
                ConfigProblem::DefaultConfigDirNotFound
                | ConfigProblem::NoConfigFound(_)
                | ConfigProblem::PathNotUtf8(_) => (
                    Some(MapperErrorSuggestion::SetConfigHome),
                    Some(MapperErrorCode::E012),
                ),
                ConfigProblem::TomlSerialization(_)
                | ConfigProblem::TomlDeserialization(_)
                | ConfigProblem::IoError(_) => (None, Some(MapperErrorCode::E012)),
            };
            return MapperErrorMetadata {
                suggestion,
                code,
                skip_printing_cause: false,
            };
        }

        if error.downcast_ref::<MutationRejected>().is_some() {
            return MapperErrorMetadata {
                suggestion: None,
                code: Some(MapperErrorCode::E009),
                skip_printing_cause: true,
            };
        }

        if error.downcast_ref::<InvalidKeyValue>().is_some() {
            return MapperErrorMetadata {
                suggestion: None,
                code: Some(MapperErrorCode::E013),
                skip_printing_cause: true,
            };
        }

        MapperErrorMetadata::default()
    }
}

fn from_gateway_error(gateway_error: &GatewayError) -> MapperErrorMetadata {
    let (suggestion, code) = match gateway_error {
        GatewayError::Http(_) => (
            Some(MapperErrorSuggestion::CheckEndpoint),
            Some(MapperErrorCode::E001),
        ),
        GatewayError::GraphQL { .. } => (None, Some(MapperErrorCode::E002)),
        GatewayError::InvalidCredentials | GatewayError::InvalidHeader(_) => (
            Some(MapperErrorSuggestion::SetToken),
            Some(MapperErrorCode::E003),
        ),
        GatewayError::MissingField { .. } | GatewayError::MalformedResponse { .. } => (
            Some(MapperErrorSuggestion::CheckServiceVersion),
            Some(MapperErrorCode::E004),
        ),
        GatewayError::InvalidRequest { .. } | GatewayError::ServiceError(_) => (
            Some(MapperErrorSuggestion::SubmitIssue),
            Some(MapperErrorCode::E005),
        ),
    };
    MapperErrorMetadata {
        suggestion,
        code,
        skip_printing_cause: true,
    }
}
