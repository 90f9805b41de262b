use std::fs;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use mapper_client::operations::mapping::{self, MappingList, MappingRule};
use serde::Deserialize;

use crate::utils::client::ClientContext;
use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
pub struct Edit {
    /// Id of the importer
    #[arg(long)]
    id: i64,

    /// JSON file holding either an array of rules or an object with a
    /// `mappings` array, in the shape `mapping list --format json` prints
    #[arg(long)]
    file: Utf8PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RuleFile {
    Rules(Vec<MappingRule>),
    List(MappingList),
}

impl Edit {
    pub async fn run(&self, context: ClientContext) -> MapperResult<MapperOutput> {
        let mappings = read_rules(&self.file)?;
        tracing::debug!(rules = mappings.len(), file = %self.file, "read mapping rules");
        let outcome = mapping::edit::run(&context.client, self.id, mappings).await?;
        Ok(MapperOutput::Mutation {
            operation: "editMappings",
            outcome,
        })
    }
}

fn read_rules(path: &Utf8Path) -> anyhow::Result<Vec<MappingRule>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("could not read '{path}'"))?;
    let rules: RuleFile = serde_json::from_str(&contents)
        .with_context(|| format!("'{path}' does not hold mapping rules"))?;
    Ok(match rules {
        RuleFile::Rules(rules) => rules,
        RuleFile::List(list) => list.mappings,
    })
}
