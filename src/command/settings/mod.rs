mod save;
mod show;

use clap::{Args, Parser, Subcommand};
use mapper_client::session::EditSession;
use mapper_schema::FieldSelector;

use crate::utils::client::ClientContext;
use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
pub struct Settings {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the behavioral settings of an importer
    Show(show::Show),

    /// Change settings and save the importer
    Save(save::Save),
}

impl Settings {
    pub async fn run(&self, context: ClientContext) -> MapperResult<MapperOutput> {
        match &self.command {
            Command::Show(command) => command.run(context).await,
            Command::Save(command) => command.run(context).await,
        }
    }
}

/// Which importer to load, and which of its properties count as settings.
#[derive(Debug, Clone, Args)]
pub struct SelectionOpts {
    /// Id of the importer. Omit to work on a new importer
    #[arg(long)]
    id: Option<i64>,

    /// Treat exactly these properties as settings. Repeat or separate with commas
    #[arg(long = "only", value_delimiter = ',', conflicts_with = "annotation")]
    only: Vec<String>,

    /// Treat properties whose schema sets this annotation to `true` as settings
    #[arg(long)]
    annotation: Option<String>,
}

impl SelectionOpts {
    fn selector(&self) -> FieldSelector {
        if !self.only.is_empty() {
            FieldSelector::allow_list(self.only.iter().cloned())
        } else if let Some(annotation) = &self.annotation {
            FieldSelector::Annotated(annotation.clone())
        } else {
            FieldSelector::default()
        }
    }

    /// Starts a session and loads the selected importer into it.
    pub async fn load(&self, context: ClientContext) -> MapperResult<EditSession> {
        let mut session = EditSession::new(context.client, self.selector(), context.default_table);
        session.select_and_load(self.id).await?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rstest::rstest;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[clap(flatten)]
        opts: SelectionOpts,
    }

    #[rstest]
    #[case::default(&["harness"], FieldSelector::default())]
    #[case::allow_list(
        &["harness", "--only", "setting_a,setting_b"],
        FieldSelector::allow_list(["setting_a", "setting_b"])
    )]
    #[case::annotated(
        &["harness", "--annotation", "x-setting"],
        FieldSelector::Annotated("x-setting".to_string())
    )]
    fn it_picks_a_selector(#[case] args: &[&str], #[case] expected: FieldSelector) {
        let harness = Harness::parse_from(args);
        assert_eq!(harness.opts.selector(), expected);
    }

    #[test]
    fn only_and_annotation_conflict() {
        let result = Harness::try_parse_from(["harness", "--only", "a", "--annotation", "x"]);
        assert!(result.is_err());
    }
}
