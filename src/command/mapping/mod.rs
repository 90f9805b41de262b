mod delete;
mod edit;
mod list;
mod reorder;

use clap::{Parser, Subcommand};

use crate::utils::client::ClientContext;
use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
pub struct Mapping {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the mapping rules of an importer
    List(list::List),

    /// Create or update mapping rules from a JSON file
    Edit(edit::Edit),

    /// Delete one mapping rule
    Delete(delete::Delete),

    /// Reorder the rules, or the rule groups, of an importer
    Reorder(reorder::Reorder),
}

impl Mapping {
    pub async fn run(&self, context: ClientContext) -> MapperResult<MapperOutput> {
        match &self.command {
            Command::List(command) => command.run(context).await,
            Command::Edit(command) => command.run(context).await,
            Command::Delete(command) => command.run(context).await,
            Command::Reorder(command) => command.run(context).await,
        }
    }
}
