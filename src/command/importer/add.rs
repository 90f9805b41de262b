use clap::Parser;
use mapper_client::operations::importer;

use super::ImporterOpts;
use crate::utils::client::ClientContext;
use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
pub struct Add {
    #[clap(flatten)]
    opts: ImporterOpts,
}

impl Add {
    pub async fn run(&self, context: ClientContext) -> MapperResult<MapperOutput> {
        let input = self.opts.clone().into_input(&context.default_table);
        let result = importer::add::run(&context.client, input).await?;
        Ok(MapperOutput::ImporterSaved {
            operation: "add",
            result,
        })
    }
}
