use clap::Parser;
use mapper_client::operations::bundle;

use crate::utils::client::ClientContext;
use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
pub struct Lookup {
    /// Id of the importer
    #[arg(long)]
    id: i64,

    /// Text to search bundle names and codes for
    #[arg(long)]
    search: String,
}

impl Lookup {
    pub async fn run(&self, context: ClientContext) -> MapperResult<MapperOutput> {
        let lookup = bundle::lookup::run(&context.client, self.id, self.search.as_str()).await?;
        Ok(MapperOutput::BundleMatches(lookup))
    }
}
