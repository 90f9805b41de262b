use clap::Parser;
use mapper_config::{Config, ConfigProblem, Profile};
use url::Url;

use crate::style::{successln, Style};
use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
/// Store the endpoint, token and table of a configuration profile
///
/// Values that are not passed keep what the profile already stores.
pub struct Set {
    /// GraphQL endpoint of the importer service
    #[arg(long)]
    endpoint: Url,

    /// Bearer token sent with every request
    #[arg(long)]
    token: Option<String>,

    /// Table new importers are bound to
    #[arg(long)]
    table: Option<String>,
}

impl Set {
    pub fn run(&self, config: Config, profile_name: &str) -> MapperResult<MapperOutput> {
        let mut profile = match Profile::load(profile_name, &config) {
            Ok(profile) => profile,
            Err(ConfigProblem::ProfileNotFound(_)) => Profile::default(),
            Err(err) => return Err(err.into()),
        };
        profile.endpoint = Some(self.endpoint.to_string());
        if let Some(table) = &self.table {
            profile.default_table = table.clone();
        }
        profile.save(profile_name, &config)?;
        if let Some(token) = &self.token {
            Profile::set_token(profile_name, &config, token)?;
        }

        successln!(
            "Saved profile '{}' for {}",
            Style::Command.paint(profile_name),
            Style::Link.paint(self.endpoint.as_str())
        );
        Ok(MapperOutput::EmptySuccess)
    }
}
