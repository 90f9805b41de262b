use super::BundleLookup;
use crate::{GatewayError, ImporterClient};

pub(crate) mod bundle_lookup_query {
    use serde::{Deserialize, Serialize};

    use super::BundleLookup;

    pub const OPERATION_NAME: &str = "BundleLookupQuery";
    pub const QUERY: &str = r#"query BundleLookupQuery($id: Int!, $search: String) {
  bundleLookup(id: $id, search: $search) {
    matches {
      name
      code
      description
    }
  }
}"#;

    #[derive(Serialize, Debug, Clone, PartialEq, Eq)]
    pub struct Variables {
        pub id: i64,
        pub search: String,
    }

    #[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct ResponseData {
        #[serde(rename = "bundleLookup", default)]
        pub bundle_lookup: Option<BundleLookup>,
    }
}

graphql_operation!(BundleLookupQuery, bundle_lookup_query);

/// Searches the destinations available to importer `id`.
pub async fn run(
    client: &ImporterClient,
    id: i64,
    search: impl Into<String>,
) -> Result<BundleLookup, GatewayError> {
    let response_data = client
        .post::<BundleLookupQuery>(bundle_lookup_query::Variables {
            id,
            search: search.into(),
        })
        .await?;
    get_lookup_from_response_data(response_data)
}

fn get_lookup_from_response_data(
    response_data: bundle_lookup_query::ResponseData,
) -> Result<BundleLookup, GatewayError> {
    response_data
        .bundle_lookup
        .ok_or(GatewayError::MissingField {
            field: "bundleLookup",
        })
}
