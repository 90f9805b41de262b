use std::fmt::{self, Display};

use serde::Serialize;

use crate::style::Style;
use crate::utils::env::MapperEnvKey;

/// `MapperErrorSuggestion` contains possible suggestions for remedying specific errors.
#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub enum MapperErrorSuggestion {
    SubmitIssue,
    CheckEndpoint,
    SetToken,
    CheckServiceVersion,
    ConfigureProfile { profile: String },
    SetConfigHome,
    ShowSettings,
}

impl Display for MapperErrorSuggestion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        use MapperErrorSuggestion::*;

        let suggestion = match self {
            SubmitIssue => {
                "This error was unexpected! Please submit an issue with any relevant details about what you were trying to do.".to_string()
            }
            CheckEndpoint => format!(
                "Make sure the importer service is running and that the endpoint is correct. You can override it with {}.",
                Style::Command.paint(format!("${}", MapperEnvKey::Endpoint))
            ),
            SetToken => format!(
                "Store a valid token with {} or set {}.",
                Style::Command.paint("mapper config set --endpoint <URL> --token <TOKEN>"),
                Style::Command.paint(format!("${}", MapperEnvKey::Key))
            ),
            CheckServiceVersion => {
                "The importer service answered in an unexpected shape. Make sure the endpoint points at a compatible importer API.".to_string()
            }
            ConfigureProfile { profile } => format!(
                "Run {} or set {}.",
                Style::Command.paint(format!(
                    "mapper config set --profile {profile} --endpoint <URL>"
                )),
                Style::Command.paint(format!("${}", MapperEnvKey::Endpoint))
            ),
            SetConfigHome => format!(
                "Set {} to a writable directory.",
                Style::Command.paint(format!("${}", MapperEnvKey::ConfigHome))
            ),
            ShowSettings => format!(
                "Run {} to see which settings this importer has.",
                Style::Command.paint("mapper settings show")
            ),
        };
        write!(formatter, "{}", &suggestion)
    }
}
