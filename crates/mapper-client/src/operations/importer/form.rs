use mapper_schema::FormDescriptor;

use crate::{GatewayError, ImporterClient};

pub(crate) mod importer_form_query {
    use serde::{Deserialize, Serialize};

    use super::FormDescriptor;

    pub const OPERATION_NAME: &str = "ImporterFormQuery";
    pub const QUERY: &str = r#"query ImporterFormQuery($id: Int!) {
  importerForm(id: $id) {
    title
    required
    properties
    uiSchema
    values
  }
}"#;

    #[derive(Serialize, Debug, Clone, PartialEq, Eq)]
    pub struct Variables {
        pub id: i64,
    }

    #[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct ResponseData {
        #[serde(rename = "importerForm", default)]
        pub importer_form: Option<FormDescriptor>,
    }
}

pub(crate) mod new_importer_form_query {
    use serde::Serialize;

    pub use super::importer_form_query::ResponseData;

    pub const OPERATION_NAME: &str = "NewImporterFormQuery";
    pub const QUERY: &str = r#"query NewImporterFormQuery {
  importerForm {
    title
    required
    properties
    uiSchema
    values
  }
}"#;

    #[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
    pub struct Variables {}
}

graphql_operation!(ImporterFormQuery, importer_form_query);
graphql_operation!(NewImporterFormQuery, new_importer_form_query);

/// Fetches the settings form of importer `id`, or the blank form for a new
/// importer when `id` is `None`.
///
/// The returned descriptor is still double-encoded; see
/// [`mapper_schema::ImporterForm::decode`].
pub async fn run(client: &ImporterClient, id: Option<i64>) -> Result<FormDescriptor, GatewayError> {
    let response_data = match id {
        Some(id) => {
            client
                .post::<ImporterFormQuery>(importer_form_query::Variables { id })
                .await?
        }
        None => {
            client
                .post::<NewImporterFormQuery>(new_importer_form_query::Variables {})
                .await?
        }
    };
    get_form_from_response_data(response_data)
}

fn get_form_from_response_data(
    response_data: importer_form_query::ResponseData,
) -> Result<FormDescriptor, GatewayError> {
    response_data
        .importer_form
        .ok_or(GatewayError::MissingField {
            field: "importerForm",
        })
}
