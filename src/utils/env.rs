use std::collections::HashMap;
use std::{env, fmt, io};

use heck::ToShoutySnakeCase;

/// MapperEnv allows us to mock environment variables while
/// running tests. That way we can run our tests in parallel,
/// and our local development environment will not have unintended
/// side effects on our tests.
#[derive(Debug, Clone)]
pub struct MapperEnv {
    mock_store: Option<HashMap<String, String>>,
}

impl Default for MapperEnv {
    fn default() -> MapperEnv {
        MapperEnv::new()
    }
}

impl MapperEnv {
    /// creates a new environment variable store
    pub fn new() -> MapperEnv {
        let mock_store = if cfg!(test) {
            Some(HashMap::new())
        } else {
            None
        };

        MapperEnv { mock_store }
    }

    /// returns the value of the environment variable if it exists
    pub fn get(&self, key: MapperEnvKey) -> io::Result<Option<String>> {
        let key_str = key.to_string();
        tracing::trace!("Checking for ${}", &key_str);
        let result = match &self.mock_store {
            Some(mock_store) => Ok(mock_store.get(&key_str).map(|v| v.to_owned())),
            None => match env::var(&key_str) {
                Ok(data) => Ok(Some(data)),
                Err(env::VarError::NotPresent) => Ok(None),
                Err(env::VarError::NotUnicode(_)) => Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("The value of the environment variable \"{key_str}\" is not valid Unicode."),
                )),
            },
        }?;

        if let Some(result) = &result {
            tracing::debug!("read {}", self.get_debug_value(key, result));
        } else {
            tracing::trace!("could not find ${}", &key_str);
        }

        Ok(result)
    }

    fn get_debug_value(&self, key: MapperEnvKey, value: &str) -> String {
        let value = if let MapperEnvKey::Key = key {
            mapper_config::mask_key(value)
        } else {
            value.to_string()
        };

        format!("environment variable ${key} = {value}")
    }

    /// sets a mocked environment variable
    #[cfg(test)]
    pub fn insert(&mut self, key: MapperEnvKey, value: &str) {
        if let Some(mock_store) = &mut self.mock_store {
            mock_store.insert(key.to_string(), value.into());
        }
    }
}

/// MapperEnvKey defines all of the environment variables
/// that are respected by mapper. Each environment variable is prefixed
/// with `MAPPER_` and the suffix is the name of the key defined here,
/// converted from CamelCase to SHOUTY_SNAKE_CASE.
/// For example, `MapperEnvKey::ConfigHome.to_string()` becomes `MAPPER_CONFIG_HOME`
#[derive(Debug, Copy, Clone)]
pub enum MapperEnvKey {
    ConfigHome,
    Endpoint,
    Key,
}

impl fmt::Display for MapperEnvKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let dbg = format!("{self:?}").to_shouty_snake_case();
        write!(fmt, "MAPPER_{dbg}")
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::config_home(MapperEnvKey::ConfigHome, "MAPPER_CONFIG_HOME")]
    #[case::endpoint(MapperEnvKey::Endpoint, "MAPPER_ENDPOINT")]
    #[case::key(MapperEnvKey::Key, "MAPPER_KEY")]
    fn it_names_keys(#[case] key: MapperEnvKey, #[case] expected: &str) {
        assert_eq!(key.to_string(), expected);
    }

    #[test]
    fn it_reads_mocked_values() {
        let mut env = MapperEnv::new();
        assert_eq!(env.get(MapperEnvKey::Endpoint).unwrap(), None);

        env.insert(MapperEnvKey::Endpoint, "http://localhost/graphql");
        assert_eq!(
            env.get(MapperEnvKey::Endpoint).unwrap().as_deref(),
            Some("http://localhost/graphql")
        );
    }
}
