mod sensitive;

use std::{fmt, fs};

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use sensitive::Sensitive;
use url::Url;

use crate::{Config, ConfigProblem};

/// Target table used when a profile does not name one
pub const DEFAULT_TABLE: &str = "ca_objects";

const PROFILE_FILE: &str = "profile.toml";

/// Non-sensitive configuration stored for a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// GraphQL endpoint of the importer service
    pub endpoint: Option<String>,

    /// Table new importers and settings saves are bound to
    #[serde(default = "default_table")]
    pub default_table: String,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            endpoint: None,
            default_table: default_table(),
        }
    }
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

/// Where a token came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialOrigin {
    /// The token override in [`Config`], usually an environment variable
    EnvVar,
    /// The `.sensitive` file of the named profile
    ConfigFile(String),
}

/// A bearer token and its origin
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// The raw token
    pub token: String,
    /// Where the token was read from
    pub origin: CredentialOrigin,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &mask_key(&self.token))
            .field("origin", &self.origin)
            .finish()
    }
}

/// Everything needed to talk to an importer service, after overrides are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProfile {
    /// Name of the profile that was resolved
    pub name: String,
    /// GraphQL endpoint
    pub endpoint: Url,
    /// Bearer token, if any is configured
    pub credential: Option<Credential>,
    /// Table new importers are bound to
    pub default_table: String,
}

impl Profile {
    pub(crate) fn dir(name: &str, config: &Config) -> Utf8PathBuf {
        config.profiles_dir().join(name)
    }

    /// Writes the non-sensitive part of a profile to
    /// `<home>/profiles/<name>/profile.toml`.
    pub fn save(&self, name: &str, config: &Config) -> Result<(), ConfigProblem> {
        if let Some(endpoint) = &self.endpoint {
            parse_endpoint(endpoint)?;
        }
        let dir = Profile::dir(name, config);
        fs::create_dir_all(&dir)?;
        let path = dir.join(PROFILE_FILE);
        fs::write(&path, toml::to_string(self)?)?;
        tracing::debug!(path = %path, "wrote profile");
        Ok(())
    }

    /// Writes a token to `<home>/profiles/<name>/.sensitive`.
    pub fn set_token(name: &str, config: &Config, token: &str) -> Result<(), ConfigProblem> {
        Sensitive {
            token: token.to_string(),
        }
        .save(name, config)
    }

    /// Loads the non-sensitive part of a profile.
    pub fn load(name: &str, config: &Config) -> Result<Profile, ConfigProblem> {
        let dir = Profile::dir(name, config);
        if !dir.exists() {
            return Err(ConfigProblem::ProfileNotFound(name.to_string()));
        }
        let path = dir.join(PROFILE_FILE);
        if !path.exists() {
            return Ok(Profile::default());
        }
        Ok(toml::from_str(&fs::read_to_string(&path)?)?)
    }

    /// Resolves the endpoint, token and table for `name`.
    ///
    /// Overrides in `config` win over anything stored on disk. A missing
    /// profile is only an error when no override supplies an endpoint.
    pub fn resolve(name: &str, config: &Config) -> Result<ResolvedProfile, ConfigProblem> {
        let stored = match Profile::load(name, config) {
            Ok(profile) => Some(profile),
            Err(ConfigProblem::ProfileNotFound(_)) if config.override_endpoint.is_some() => None,
            Err(err) => return Err(err),
        };

        let endpoint = config
            .override_endpoint
            .clone()
            .or_else(|| stored.as_ref().and_then(|profile| profile.endpoint.clone()))
            .ok_or_else(|| ConfigProblem::NoEndpoint(name.to_string()))?;
        let endpoint = parse_endpoint(&endpoint)?;

        let credential = match &config.override_token {
            Some(token) => Some(Credential {
                token: token.clone(),
                origin: CredentialOrigin::EnvVar,
            }),
            None => Sensitive::load(name, config)?.map(|sensitive| Credential {
                token: sensitive.token,
                origin: CredentialOrigin::ConfigFile(name.to_string()),
            }),
        };

        let resolved = ResolvedProfile {
            name: name.to_string(),
            endpoint,
            credential,
            default_table: stored.map(|profile| profile.default_table).unwrap_or_else(default_table),
        };
        tracing::debug!(?resolved);
        Ok(resolved)
    }

    /// Deletes profile data from file system.
    pub fn delete(name: &str, config: &Config) -> Result<(), ConfigProblem> {
        let dir = Profile::dir(name, config);
        tracing::debug!(dir = %dir, "deleting profile");
        fs::remove_dir_all(&dir).map_err(|_| ConfigProblem::ProfileNotFound(name.to_string()))
    }

    /// Lists profiles based on directories in `<home>/profiles`
    pub fn list(config: &Config) -> Result<Vec<String>, ConfigProblem> {
        let profiles_dir = config.profiles_dir();
        let mut profiles = vec![];

        // if profiles dir doesn't exist return empty vec
        let Ok(entries) = profiles_dir.read_dir_utf8() else {
            return Ok(profiles);
        };

        for entry in entries {
            let entry = entry?;
            if entry.path().is_dir() {
                tracing::debug!(profile = entry.file_name(), "detected profile");
                profiles.push(entry.file_name().to_string());
            }
        }
        profiles.sort();
        Ok(profiles)
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, ConfigProblem> {
    Url::parse(endpoint).map_err(|source| ConfigProblem::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        source,
    })
}

/// Masks all but the first 4 and last 4 chars of a token with a set number of *.
/// Tokens of 8 chars or fewer are masked completely.
pub fn mask_key(token: &str) -> String {
    const MASK: &str = "******************";
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return MASK.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}{MASK}{tail}")
}
