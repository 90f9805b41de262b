use clap::Parser;
use mapper_client::operations::mapping::{self, ReorderTarget};

use crate::utils::client::ClientContext;
use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
pub struct Reorder {
    /// Id of the importer
    #[arg(long)]
    id: i64,

    /// The complete new order, e.g. `3,1,2`
    #[arg(long, value_delimiter = ',', required = true)]
    ids: Vec<i64>,

    /// Reorder rule groups instead of rules
    #[arg(long)]
    groups: bool,
}

impl Reorder {
    pub async fn run(&self, context: ClientContext) -> MapperResult<MapperOutput> {
        let target = if self.groups {
            ReorderTarget::Groups
        } else {
            ReorderTarget::Mappings
        };
        let outcome =
            mapping::reorder::run(&context.client, target, self.id, self.ids.clone().into())
                .await?;
        Ok(MapperOutput::Mutation {
            operation: target.field(),
            outcome,
        })
    }
}
