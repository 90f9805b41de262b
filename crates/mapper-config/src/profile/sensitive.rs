use std::fs;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::{profile::Profile, Config, ConfigProblem};

/// Holds sensitive information regarding authentication.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Sensitive {
    pub(crate) token: String,
}

impl Sensitive {
    fn path(profile_name: &str, config: &Config) -> Utf8PathBuf {
        Profile::dir(profile_name, config).join(".sensitive")
    }

    /// Serializes to toml and saves to `<home>/profiles/<profile_name>/.sensitive`.
    pub(crate) fn save(&self, profile_name: &str, config: &Config) -> Result<(), ConfigProblem> {
        let path = Sensitive::path(profile_name, config);
        let data = toml::to_string(self)?;

        if let Some(dirs) = path.parent() {
            fs::create_dir_all(dirs)?;
        }

        fs::write(&path, data)?;
        tracing::debug!(path = %path, token = %super::mask_key(&self.token), "wrote token");
        Ok(())
    }

    /// Opens and deserializes `<home>/profiles/<profile_name>/.sensitive`, if present.
    pub(crate) fn load(profile_name: &str, config: &Config) -> Result<Option<Sensitive>, ConfigProblem> {
        let path = Sensitive::path(profile_name, config);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        Ok(Some(toml::from_str(&contents)?))
    }
}
