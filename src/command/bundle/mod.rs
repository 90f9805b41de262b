mod list;
mod lookup;

use clap::{Parser, Subcommand};

use crate::utils::client::ClientContext;
use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
pub struct Bundle {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the bundles a mapping rule can write to
    List(list::List),

    /// Search the bundles available to an importer
    Lookup(lookup::Lookup),
}

impl Bundle {
    pub async fn run(&self, context: ClientContext) -> MapperResult<MapperOutput> {
        match &self.command {
            Command::List(command) => command.run(context).await,
            Command::Lookup(command) => command.run(context).await,
        }
    }
}
