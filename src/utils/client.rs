use mapper_client::{ClientConfig, ImporterClient};
use mapper_config::{Config, Profile};

use crate::{MapperResult, PKG_VERSION};

/// A client bound to a resolved profile, plus the profile's table.
#[derive(Debug, Clone)]
pub struct ClientContext {
    pub client: ImporterClient,
    pub default_table: String,
}

pub struct ImporterClientConfig {
    config: Config,
    version: String,
}

impl ImporterClientConfig {
    pub fn new(config: Config) -> ImporterClientConfig {
        let version = if cfg!(debug_assertions) {
            format!("{PKG_VERSION} (dev)")
        } else {
            PKG_VERSION.to_string()
        };

        ImporterClientConfig { config, version }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn get_context(&self, profile_name: &str) -> MapperResult<ClientContext> {
        let profile = Profile::resolve(profile_name, &self.config)?;
        let config = ClientConfig::builder()
            .endpoint(profile.endpoint)
            .and_token(profile.credential.map(|credential| credential.token))
            .client_version(self.version.clone())
            .build();
        Ok(ClientContext {
            client: ImporterClient::new(config)?,
            default_table: profile.default_table,
        })
    }
}
