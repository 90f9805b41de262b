use clap::Parser;
use mapper_config::{Config, Profile};

use crate::style::{successln, Style};
use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
/// Delete a configuration profile
///
/// Deletes the profile chosen with `--profile`, `default` when none is given.
pub struct Delete {}

impl Delete {
    pub fn run(&self, config: Config, profile_name: &str) -> MapperResult<MapperOutput> {
        Profile::delete(profile_name, &config)?;
        successln!(
            "Successfully deleted profile '{}'",
            Style::Command.paint(profile_name)
        );
        Ok(MapperOutput::EmptySuccess)
    }
}
