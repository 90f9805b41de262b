use super::{ImporterInput, ImporterMutationResult};
use crate::{GatewayError, ImporterClient};

pub(crate) mod importer_edit_mutation {
    use serde::{Deserialize, Serialize};

    use super::{ImporterInput, ImporterMutationResult};

    pub const OPERATION_NAME: &str = "ImporterEditMutation";
    pub const QUERY: &str = r#"mutation ImporterEditMutation($id: Int!, $name: String, $formats: [String], $code: String, $table: String, $type: Int, $settings: [ImporterSetting]) {
  edit(id: $id, name: $name, formats: $formats, code: $code, table: $table, type: $type, settings: $settings) {
    id
    name
    code
    table
    type
    formats
    source
    errors {
      id
      code
      message
    }
  }
}"#;

    #[derive(Serialize, Debug, Clone, PartialEq, Eq)]
    pub struct Variables {
        pub id: i64,
        #[serde(flatten)]
        pub input: ImporterInput,
    }

    #[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct ResponseData {
        #[serde(default)]
        pub edit: Option<ImporterMutationResult>,
    }
}

graphql_operation!(ImporterEditMutation, importer_edit_mutation);

/// Replaces the metadata and settings of importer `id`.
pub async fn run(
    client: &ImporterClient,
    id: i64,
    input: ImporterInput,
) -> Result<ImporterMutationResult, GatewayError> {
    let response_data = client
        .post::<ImporterEditMutation>(importer_edit_mutation::Variables { id, input })
        .await?;
    get_result_from_response_data(response_data).map(|result| result.logged("edit"))
}

fn get_result_from_response_data(
    response_data: importer_edit_mutation::ResponseData,
) -> Result<ImporterMutationResult, GatewayError> {
    response_data
        .edit
        .ok_or(GatewayError::MissingField { field: "edit" })
}
