use super::ImporterDescriptor;
use crate::{ImporterClient, GatewayError};

pub(crate) mod importer_list_query {
    use serde::{Deserialize, Serialize};

    use super::ImporterDescriptor;

    pub const OPERATION_NAME: &str = "ImporterListQuery";
    pub const QUERY: &str = r#"query ImporterListQuery {
  list {
    id
    name
    code
    table
    formats
    source
  }
}"#;

    #[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
    pub struct Variables {}

    #[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct ResponseData {
        #[serde(default)]
        pub list: Option<Vec<ImporterDescriptor>>,
    }
}

graphql_operation!(ImporterListQuery, importer_list_query);

/// Lists every importer the service knows about.
pub async fn run(client: &ImporterClient) -> Result<Vec<ImporterDescriptor>, GatewayError> {
    let response_data = client
        .post::<ImporterListQuery>(importer_list_query::Variables {})
        .await?;
    get_importers_from_response_data(response_data)
}

fn get_importers_from_response_data(
    response_data: importer_list_query::ResponseData,
) -> Result<Vec<ImporterDescriptor>, GatewayError> {
    response_data
        .list
        .ok_or(GatewayError::MissingField { field: "list" })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn get_importers_from_response_data_works() {
        let json_response = json!({
            "list": [
                {
                    "id": 1,
                    "name": "Objects from CSV",
                    "code": "objects_csv",
                    "table": "ca_objects",
                    "formats": ["csv", "xlsx"],
                    "source": "objects.xlsx"
                },
                { "id": 2, "name": null, "code": "bare", "table": null, "formats": null, "source": null }
            ]
        });
        let data: importer_list_query::ResponseData =
            serde_json::from_value(json_response).unwrap();
        let importers = get_importers_from_response_data(data).unwrap();

        assert_eq!(importers.len(), 2);
        assert_eq!(importers[0].formats, vec!["csv", "xlsx"]);
        assert_eq!(importers[1].code.as_deref(), Some("bare"));
        assert!(importers[1].formats.is_empty());
    }

    #[test]
    fn get_importers_from_response_data_reads_string_ids() {
        let data: importer_list_query::ResponseData =
            serde_json::from_value(json!({ "list": [{ "id": "12", "code": "x" }] })).unwrap();
        let importers = get_importers_from_response_data(data).unwrap();
        assert_eq!(importers[0].id, 12);
    }

    #[test]
    fn get_importers_from_response_data_errs_without_list() {
        let data: importer_list_query::ResponseData = serde_json::from_value(json!({})).unwrap();
        let output = get_importers_from_response_data(data);
        assert!(matches!(
            output,
            Err(GatewayError::MissingField { field: "list" })
        ));
    }

    #[test]
    fn the_query_names_its_operation() {
        use graphql_client::GraphQLQuery;
        let body = ImporterListQuery::build_query(importer_list_query::Variables {});
        assert_eq!(body.operation_name, "ImporterListQuery");
        assert!(body.query.starts_with("query ImporterListQuery"));
    }
}
