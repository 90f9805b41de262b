use clap::Parser;
use mapper_config::{mask_key, Config, Profile};

use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
/// View a configuration profile's details
///
/// The token is masked. Environment overrides are applied.
pub struct Show {}

impl Show {
    pub fn run(&self, config: Config, profile_name: &str) -> MapperResult<MapperOutput> {
        let profile = Profile::resolve(profile_name, &config)?;
        Ok(MapperOutput::Profile {
            name: profile.name,
            endpoint: profile.endpoint.to_string(),
            token: profile.credential.map(|credential| mask_key(&credential.token)),
            default_table: profile.default_table,
        })
    }
}
