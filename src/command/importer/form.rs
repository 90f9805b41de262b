use clap::Parser;
use mapper_client::operations::importer;
use mapper_schema::ImporterForm;

use crate::utils::client::ClientContext;
use crate::{MapperOutput, MapperResult};

#[derive(Debug, Parser)]
pub struct Form {
    /// Id of the importer. Omit for the form of a new importer
    #[arg(long)]
    id: Option<i64>,
}

impl Form {
    pub async fn run(&self, context: ClientContext) -> MapperResult<MapperOutput> {
        let descriptor = importer::form::run(&context.client, self.id).await?;
        let form = ImporterForm::decode(&descriptor)?;
        Ok(MapperOutput::ImporterForm(form))
    }
}
