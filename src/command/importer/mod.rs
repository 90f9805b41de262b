mod add;
mod delete;
mod edit;
mod form;
mod list;

use clap::{Args, Parser, Subcommand};
use mapper_client::operations::importer::{ImporterInput, ImporterSetting};

use crate::utils::{client::ClientContext, parsers::parse_key_value};
use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
pub struct Importer {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every importer
    List(list::List),

    /// Show the form of an importer, or the blank form for a new one
    Form(form::Form),

    /// Create a new importer
    Add(add::Add),

    /// Replace the metadata and settings of an importer
    Edit(edit::Edit),

    /// Delete an importer and its mapping rules
    Delete(delete::Delete),
}

impl Importer {
    pub async fn run(&self, context: ClientContext) -> MapperResult<MapperOutput> {
        match &self.command {
            Command::List(command) => command.run(context).await,
            Command::Form(command) => command.run(context).await,
            Command::Add(command) => command.run(context).await,
            Command::Edit(command) => command.run(context).await,
            Command::Delete(command) => command.run(context).await,
        }
    }
}

/// Importer metadata accepted by `add` and `edit`.
#[derive(Debug, Clone, Args)]
pub struct ImporterOpts {
    /// Display name of the importer
    #[arg(long)]
    name: Option<String>,

    /// Unique code of the importer
    #[arg(long)]
    code: Option<String>,

    /// Accepted input format, e.g. `csv`. Repeat or separate with commas
    #[arg(long = "input-format", value_delimiter = ',')]
    formats: Vec<String>,

    /// Numeric importer type
    #[arg(long = "type")]
    importer_type: Option<i64>,

    /// Target table. Defaults to the profile's table
    #[arg(long)]
    table: Option<String>,

    /// Importer setting as `code=value`. May be repeated
    #[arg(long = "setting", value_parser = parse_key_value)]
    settings: Vec<(String, String)>,
}

impl ImporterOpts {
    pub fn into_input(self, default_table: &str) -> ImporterInput {
        ImporterInput {
            name: self.name,
            formats: self.formats,
            code: self.code,
            table: Some(self.table.unwrap_or_else(|| default_table.to_string())),
            importer_type: self.importer_type,
            settings: self
                .settings
                .into_iter()
                .map(|(code, value)| ImporterSetting::new(code, value))
                .collect(),
        }
    }
}
