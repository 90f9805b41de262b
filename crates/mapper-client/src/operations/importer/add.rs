use super::{ImporterInput, ImporterMutationResult};
use crate::{GatewayError, ImporterClient};

pub(crate) mod importer_add_mutation {
    use serde::{Deserialize, Serialize};

    use super::{ImporterInput, ImporterMutationResult};

    pub const OPERATION_NAME: &str = "ImporterAddMutation";
    pub const QUERY: &str = r#"mutation ImporterAddMutation($name: String, $formats: [String], $code: String, $table: String, $type: Int, $settings: [ImporterSetting]) {
  add(name: $name, formats: $formats, code: $code, table: $table, type: $type, settings: $settings) {
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
        #[serde(flatten)]
        pub input: ImporterInput,
    }

    #[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct ResponseData {
        #[serde(default)]
        pub add: Option<ImporterMutationResult>,
    }
}

graphql_operation!(ImporterAddMutation, importer_add_mutation);

/// Creates a new importer.
///
/// A rejection comes back as a result with a non-empty `errors` list, not as
/// an `Err`.
pub async fn run(
    client: &ImporterClient,
    input: ImporterInput,
) -> Result<ImporterMutationResult, GatewayError> {
    let response_data = client
        .post::<ImporterAddMutation>(importer_add_mutation::Variables { input })
        .await?;
    get_result_from_response_data(response_data).map(|result| result.logged("add"))
}

fn get_result_from_response_data(
    response_data: importer_add_mutation::ResponseData,
) -> Result<ImporterMutationResult, GatewayError> {
    response_data
        .add
        .ok_or(GatewayError::MissingField { field: "add" })
}
