use clap::Parser;
use mapper_config::{Config, Profile};

use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
/// List all configuration profiles
pub struct List {}

impl List {
    pub fn run(&self, config: Config) -> MapperResult<MapperOutput> {
        let profiles = Profile::list(&config)?;
        Ok(MapperOutput::Profiles(profiles))
    }
}
