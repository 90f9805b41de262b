use super::MappingRule;
use crate::{shared::MutationOutcome, GatewayError, ImporterClient};

pub(crate) mod mapping_edit_mutation {
    use serde::{Deserialize, Serialize};

    use super::MappingRule;
    use crate::shared::MutationOutcome;

    pub const OPERATION_NAME: &str = "MappingEditMutation";
    pub const QUERY: &str = r#"mutation MappingEditMutation($id: Int!, $mappings: [ImporterMappingInput]) {
  editMappings(id: $id, mappings: $mappings) {
    id
    errors {
      id
      code
      message
    }
    warnings {
      id
      code
      message
    }
    info {
      id
      code
      message
    }
  }
}"#;

    #[derive(Serialize, Debug, Clone, PartialEq, Eq)]
    pub struct Variables {
        pub id: i64,
        pub mappings: Vec<MappingRule>,
    }

    #[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct ResponseData {
        #[serde(rename = "editMappings", default)]
        pub edit_mappings: Option<MutationOutcome>,
    }
}

graphql_operation!(MappingEditMutation, mapping_edit_mutation);

/// Creates or updates the given rules of importer `id`.
///
/// Per-rule problems come back in the outcome's lists, keyed by rule id.
pub async fn run(
    client: &ImporterClient,
    id: i64,
    mappings: Vec<MappingRule>,
) -> Result<MutationOutcome, GatewayError> {
    let response_data = client
        .post::<MappingEditMutation>(mapping_edit_mutation::Variables { id, mappings })
        .await?;
    get_outcome_from_response_data(response_data).map(|outcome| outcome.logged("editMappings"))
}

fn get_outcome_from_response_data(
    response_data: mapping_edit_mutation::ResponseData,
) -> Result<MutationOutcome, GatewayError> {
    response_data
        .edit_mappings
        .ok_or(GatewayError::MissingField {
            field: "editMappings",
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn per_rule_errors_keep_their_ids() {
        let data: mapping_edit_mutation::ResponseData = serde_json::from_value(json!({
            "editMappings": {
                "id": 4,
                "errors": [{ "id": 17, "code": "destination", "message": "Unknown bundle" }],
                "warnings": [],
                "info": [{ "id": null, "code": null, "message": "1 rule saved" }]
            }
        }))
        .unwrap();
        let outcome = get_outcome_from_response_data(data).unwrap();

        assert_that!(outcome.is_rejected()).is_true();
        assert_that!(outcome.errors[0].id).is_equal_to(Some(17));
        assert_that!(outcome.errors[0].to_string())
            .is_equal_to("[destination] #17: Unknown bundle".to_string());
        assert_that!(outcome.info).has_length(1);
    }
}
