use crate::{shared::MutationOutcome, GatewayError, ImporterClient};

pub(crate) mod mapping_delete_mutation {
    use serde::{Deserialize, Serialize};

    use crate::shared::MutationOutcome;

    pub const OPERATION_NAME: &str = "MappingDeleteMutation";
    pub const QUERY: &str = r#"mutation MappingDeleteMutation($id: Int!, $mapping_id: Int!) {
  deleteMapping(id: $id, mapping_id: $mapping_id) {
    id
    errors {
      message
    }
  }
}"#;

    #[derive(Serialize, Debug, Clone, PartialEq, Eq)]
    pub struct Variables {
        pub id: i64,
        pub mapping_id: i64,
    }

    #[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct ResponseData {
        #[serde(rename = "deleteMapping", default)]
        pub delete_mapping: Option<MutationOutcome>,
    }
}

graphql_operation!(MappingDeleteMutation, mapping_delete_mutation);

/// Deletes rule `mapping_id` from importer `id`.
pub async fn run(
    client: &ImporterClient,
    id: i64,
    mapping_id: i64,
) -> Result<MutationOutcome, GatewayError> {
    let response_data = client
        .post::<MappingDeleteMutation>(mapping_delete_mutation::Variables { id, mapping_id })
        .await?;
    get_outcome_from_response_data(response_data).map(|outcome| outcome.logged("deleteMapping"))
}

fn get_outcome_from_response_data(
    response_data: mapping_delete_mutation::ResponseData,
) -> Result<MutationOutcome, GatewayError> {
    response_data
        .delete_mapping
        .ok_or(GatewayError::MissingField {
            field: "deleteMapping",
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn variables_use_the_wire_names() {
        let variables = mapping_delete_mutation::Variables {
            id: 4,
            mapping_id: 19,
        };
        assert_eq!(
            serde_json::to_value(variables).unwrap(),
            json!({ "id": 4, "mapping_id": 19 })
        );
    }

    #[test]
    fn get_outcome_from_response_data_errs_on_null() {
        let data: mapping_delete_mutation::ResponseData =
            serde_json::from_value(json!({ "deleteMapping": null })).unwrap();
        assert!(get_outcome_from_response_data(data).is_err());
    }
}
