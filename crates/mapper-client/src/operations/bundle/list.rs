use serde::Deserialize;

use super::BundleDescriptor;
use crate::{shared::de, GatewayError, ImporterClient};

/// Wrapper object the `bundles` field answers with.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct BundleList {
    #[serde(default, deserialize_with = "de::null_as_default")]
    bundles: Vec<BundleDescriptor>,
}

pub(crate) mod bundle_list_query {
    use serde::{Deserialize, Serialize};

    use super::BundleList;

    pub const OPERATION_NAME: &str = "BundleListQuery";
    pub const QUERY: &str = r#"query BundleListQuery($table: String) {
  bundles(table: $table) {
    bundles {
      name
      code
      description
      type
      dataType
      list
      typeRestrictions {
        name
        type
        minAttributesPerRow
        maxAttributesPerRow
      }
      settings {
        name
        value
      }
      subelements {
        name
        code
        type
        dataType
        list
        settings {
          name
          value
        }
      }
    }
  }
}"#;

    #[derive(Serialize, Debug, Clone, PartialEq, Eq)]
    pub struct Variables {
        pub table: String,
    }

    #[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct ResponseData {
        #[serde(default)]
        pub bundles: Option<BundleList>,
    }
}

graphql_operation!(BundleListQuery, bundle_list_query);

/// Lists every bundle of `table` a rule can map onto.
pub async fn run(
    client: &ImporterClient,
    table: impl Into<String>,
) -> Result<Vec<BundleDescriptor>, GatewayError> {
    let table = table.into();
    tracing::debug!(%table, "listing bundles");
    let response_data = client
        .post::<BundleListQuery>(bundle_list_query::Variables { table })
        .await?;
    get_bundles_from_response_data(response_data)
}

fn get_bundles_from_response_data(
    response_data: bundle_list_query::ResponseData,
) -> Result<Vec<BundleDescriptor>, GatewayError> {
    response_data
        .bundles
        .map(|list| list.bundles)
        .ok_or(GatewayError::MissingField { field: "bundles" })
}
