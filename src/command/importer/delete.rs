use clap::Parser;
use mapper_client::operations::importer;

use crate::utils::client::ClientContext;
use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
pub struct Delete {
    /// Id of the importer to delete
    #[arg(long)]
    id: i64,
}

impl Delete {
    pub async fn run(&self, context: ClientContext) -> MapperResult<MapperOutput> {
        let outcome = importer::delete::run(&context.client, self.id).await?;
        Ok(MapperOutput::Mutation {
            operation: "delete",
            outcome,
        })
    }
}
