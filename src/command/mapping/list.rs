use clap::Parser;
use mapper_client::operations::mapping;

use crate::utils::client::ClientContext;
use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
pub struct List {
    /// Id of the importer
    #[arg(long)]
    id: i64,
}

impl List {
    pub async fn run(&self, context: ClientContext) -> MapperResult<MapperOutput> {
        let list = mapping::list::run(&context.client, self.id).await?;
        Ok(MapperOutput::Mappings(list))
    }
}
