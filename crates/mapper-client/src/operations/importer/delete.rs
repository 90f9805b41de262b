use crate::{shared::MutationOutcome, GatewayError, ImporterClient};

pub(crate) mod importer_delete_mutation {
    use serde::{Deserialize, Serialize};

    use crate::shared::MutationOutcome;

    pub const OPERATION_NAME: &str = "ImporterDeleteMutation";
    pub const QUERY: &str = r#"mutation ImporterDeleteMutation($id: Int!) {
  delete(id: $id) {
    id
    errors {
      message
    }
    warnings {
      message
    }
    info {
      message
    }
  }
}"#;

    #[derive(Serialize, Debug, Clone, PartialEq, Eq)]
    pub struct Variables {
        pub id: i64,
    }

    #[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct ResponseData {
        #[serde(default)]
        pub delete: Option<MutationOutcome>,
    }
}

graphql_operation!(ImporterDeleteMutation, importer_delete_mutation);

/// Deletes importer `id` along with its mapping rules.
pub async fn run(client: &ImporterClient, id: i64) -> Result<MutationOutcome, GatewayError> {
    let response_data = client
        .post::<ImporterDeleteMutation>(importer_delete_mutation::Variables { id })
        .await?;
    get_outcome_from_response_data(response_data).map(|outcome| outcome.logged("delete"))
}

fn get_outcome_from_response_data(
    response_data: importer_delete_mutation::ResponseData,
) -> Result<MutationOutcome, GatewayError> {
    response_data
        .delete
        .ok_or(GatewayError::MissingField { field: "delete" })
}
