use clap::Parser;
use mapper_client::operations::importer;

use super::ImporterOpts;
use crate::utils::client::ClientContext;
use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
pub struct Edit {
    /// Id of the importer to edit
    #[arg(long)]
    id: i64,

    #[clap(flatten)]
    opts: ImporterOpts,
}

impl Edit {
    pub async fn run(&self, context: ClientContext) -> MapperResult<MapperOutput> {
        let input = self.opts.clone().into_input(&context.default_table);
        let result = importer::edit::run(&context.client, self.id, input).await?;
        Ok(MapperOutput::ImporterSaved {
            operation: "edit",
            result,
        })
    }
}
