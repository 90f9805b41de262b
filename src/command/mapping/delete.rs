use clap::Parser;
use mapper_client::operations::mapping;

use crate::utils::client::ClientContext;
use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
pub struct Delete {
    /// Id of the importer
    #[arg(long)]
    id: i64,

    /// Id of the rule to delete
    #[arg(long)]
    mapping_id: i64,
}

impl Delete {
    pub async fn run(&self, context: ClientContext) -> MapperResult<MapperOutput> {
        let outcome = mapping::delete::run(&context.client, self.id, self.mapping_id).await?;
        Ok(MapperOutput::Mutation {
            operation: "deleteMapping",
            outcome,
        })
    }
}
