use clap::Parser;
use mapper_client::operations::bundle;

use crate::utils::client::ClientContext;
use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
pub struct List {
    /// Table to list bundles of. Defaults to the profile's table
    #[arg(long)]
    table: Option<String>,
}

impl List {
    pub async fn run(&self, context: ClientContext) -> MapperResult<MapperOutput> {
        let table = self.table.clone().unwrap_or(context.default_table);
        let bundles = bundle::list::run(&context.client, table).await?;
        Ok(MapperOutput::Bundles(bundles))
    }
}
