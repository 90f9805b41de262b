mod delete;
mod list;
mod set;
mod show;

use clap::{Parser, Subcommand};
use mapper_config::Config as MapperConfig;

use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
pub struct Config {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the endpoint, token and table of a configuration profile
    Set(set::Set),

    /// View a configuration profile's details
    Show(show::Show),

    /// List all configuration profiles
    List(list::List),

    /// Delete a configuration profile
    Delete(delete::Delete),
}

impl Config {
    pub fn run(&self, config: MapperConfig, profile_name: &str) -> MapperResult<MapperOutput> {
        match &self.command {
            Command::Set(command) => command.run(config, profile_name),
            Command::Show(command) => command.run(config, profile_name),
            Command::List(command) => command.run(config),
            Command::Delete(command) => command.run(config, profile_name),
        }
    }
}
