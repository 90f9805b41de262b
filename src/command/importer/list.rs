use clap::Parser;
use mapper_client::operations::importer;

use crate::utils::client::ClientContext;
use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
pub struct List {}

impl List {
    pub async fn run(&self, context: ClientContext) -> MapperResult<MapperOutput> {
        let importers = importer::list::run(&context.client).await?;
        Ok(MapperOutput::Importers(importers))
    }
}
