use super::MappingList;
use crate::{GatewayError, ImporterClient};

pub(crate) mod mapping_list_query {
    use serde::{Deserialize, Serialize};

    use super::MappingList;

    pub const OPERATION_NAME: &str = "MappingListQuery";
    pub const QUERY: &str = r#"query MappingListQuery($id: Int!) {
  listMappings(id: $id) {
    mappings {
      id
      type
      group_id
      source
      destination
      options {
        name
        value
      }
      refineries {
        refinery
        options {
          name
          value
        }
      }
      replacement_values {
        original
        replacement
      }
    }
  }
}"#;

    #[derive(Serialize, Debug, Clone, PartialEq, Eq)]
    pub struct Variables {
        pub id: i64,
    }

    #[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct ResponseData {
        #[serde(rename = "listMappings", default)]
        pub list_mappings: Option<MappingList>,
    }
}

graphql_operation!(MappingListQuery, mapping_list_query);

/// Lists the mapping rules of importer `id`.
pub async fn run(client: &ImporterClient, id: i64) -> Result<MappingList, GatewayError> {
    let response_data = client
        .post::<MappingListQuery>(mapping_list_query::Variables { id })
        .await?;
    get_mappings_from_response_data(response_data)
}

fn get_mappings_from_response_data(
    response_data: mapping_list_query::ResponseData,
) -> Result<MappingList, GatewayError> {
    response_data
        .list_mappings
        .ok_or(GatewayError::MissingField {
            field: "listMappings",
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn get_mappings_from_response_data_keeps_service_order() {
        let data: mapping_list_query::ResponseData = serde_json::from_value(json!({
            "listMappings": {
                "mappings": [
                    { "id": 5, "type": "MAPPING", "group_id": 1, "source": "1", "destination": "ca_objects.idno" },
                    { "id": 2, "type": "SKIP", "group_id": 1, "source": "2", "destination": null }
                ]
            }
        }))
        .unwrap();
        let list = get_mappings_from_response_data(data).unwrap();
        let ids: Vec<_> = list.mappings.iter().map(|rule| rule.id).collect();
        assert_eq!(ids, vec![Some(5), Some(2)]);
    }

    #[test]
    fn an_importer_without_rules_has_an_empty_list() {
        let data: mapping_list_query::ResponseData =
            serde_json::from_value(json!({ "listMappings": { "mappings": null } })).unwrap();
        let list = get_mappings_from_response_data(data).unwrap();
        assert!(list.mappings.is_empty());
    }

    #[test]
    fn get_mappings_from_response_data_errs_without_field() {
        let data: mapping_list_query::ResponseData = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(
            get_mappings_from_response_data(data),
            Err(GatewayError::MissingField {
                field: "listMappings"
            })
        ));
    }
}
