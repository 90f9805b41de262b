use clap::Parser;
use mapper_schema::JsonObject;
use serde_json::Value;

use super::SelectionOpts;
use crate::style::warnln;
use crate::utils::{client::ClientContext, parsers::parse_setting};
use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
pub struct Save {
    #[clap(flatten)]
    selection: SelectionOpts,

    /// New value for a setting as `key=value`; JSON values are parsed.
    /// May be repeated
    #[arg(long = "set", value_parser = parse_setting)]
    set: Vec<(String, Value)>,
}

impl Save {
    pub async fn run(&self, context: ClientContext) -> MapperResult<MapperOutput> {
        let mut session = self.selection.load(context).await?;
        let edits: JsonObject = self.set.iter().cloned().collect();
        let outcome = session.save(edits).await?;
        if outcome.importers.is_none() {
            warnln!("Saved, but the importer list could not be refreshed.");
        }
        Ok(MapperOutput::SettingsSaved(outcome))
    }
}
