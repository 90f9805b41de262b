use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use directories_next::ProjectDirs;

use crate::ConfigProblem;

/// Name of the profile used when none is given
pub const DEFAULT_PROFILE: &str = "default";

/// Config allows end users to override the settings stored on disk.
/// Library consumers use it to support environment variable overrides.
#[derive(Debug, Clone)]
pub struct Config {
    /// home is the path to the user's global config directory
    pub home: Utf8PathBuf,

    /// override_endpoint replaces the endpoint stored in any profile
    pub override_endpoint: Option<String>,

    /// override_token replaces the token stored in any profile
    pub override_token: Option<String>,
}

impl Config {
    /// Creates a new instance of `Config`
    pub fn new(
        override_home: Option<&impl AsRef<Utf8Path>>,
        override_endpoint: Option<String>,
        override_token: Option<String>,
    ) -> Result<Config, ConfigProblem> {
        let home = match override_home {
            Some(home) => home.as_ref().to_path_buf(),
            None => {
                // Lin: /home/alice/.config/mapper
                // Win: C:\Users\Alice\AppData\Roaming\Mapper\Mapper\config
                // Mac: /Users/Alice/Library/Application Support/org.Mapper.Mapper
                let dir = ProjectDirs::from("org", "Mapper", "Mapper")
                    .ok_or(ConfigProblem::DefaultConfigDirNotFound)?
                    .config_dir()
                    .to_path_buf();
                Utf8PathBuf::try_from(dir)?
            }
        };

        Ok(Config {
            home,
            override_endpoint,
            override_token,
        })
    }

    /// Directory holding one sub-directory per profile
    pub fn profiles_dir(&self) -> Utf8PathBuf {
        self.home.join("profiles")
    }

    /// Removes all configuration files from filesystem
    pub fn clear(&self) -> Result<(), ConfigProblem> {
        tracing::debug!(home_dir = ?self.home);
        fs::remove_dir_all(&self.home)
            .map_err(|_| ConfigProblem::NoConfigFound(self.home.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use assert_fs::TempDir;
    use camino::Utf8PathBuf;

    use super::Config;

    #[test]
    fn it_can_clear_global_config() {
        let tmp_home = TempDir::new().unwrap();
        let home = Utf8PathBuf::try_from(tmp_home.path().join("mapper")).unwrap();
        let config = Config::new(Some(&home), None, None).unwrap();
        std::fs::create_dir(&config.home).unwrap();
        assert!(config.home.exists());
        config.clear().unwrap();
        assert!(!config.home.exists());
    }

    #[test]
    fn clearing_a_missing_home_is_an_error() {
        let tmp_home = TempDir::new().unwrap();
        let home = Utf8PathBuf::try_from(tmp_home.path().join("never-created")).unwrap();
        let config = Config::new(Some(&home), None, None).unwrap();
        assert!(config.clear().is_err());
    }
}
