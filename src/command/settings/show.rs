use clap::Parser;

use super::SelectionOpts;
use crate::utils::client::ClientContext;
use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
pub struct Show {
    #[clap(flatten)]
    selection: SelectionOpts,
}

impl Show {
    pub async fn run(&self, context: ClientContext) -> MapperResult<MapperOutput> {
        let session = self.selection.load(context).await?;
        let projection = session.projection().cloned().unwrap_or_default();
        Ok(MapperOutput::Settings(projection))
    }
}
