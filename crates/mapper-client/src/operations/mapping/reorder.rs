use super::ReorderInput;
use crate::{shared::MutationOutcome, GatewayError, ImporterClient};

pub(crate) mod mapping_reorder_mutation {
    use serde::{Deserialize, Serialize};

    use super::ReorderInput;
    use crate::shared::MutationOutcome;

    pub const OPERATION_NAME: &str = "MappingReorderMutation";
    pub const QUERY: &str = r#"mutation MappingReorderMutation($id: Int!, $data: ImporterReorderInputType) {
  reorderMappings(id: $id, data: $data) {
    id
    errors {
      message
    }
  }
}"#;

    #[derive(Serialize, Debug, Clone, PartialEq, Eq)]
    pub struct Variables {
        pub id: i64,
        pub data: ReorderInput,
    }

    #[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct ResponseData {
        #[serde(rename = "reorderMappings", default)]
        pub reorder_mappings: Option<MutationOutcome>,
    }
}

pub(crate) mod group_reorder_mutation {
    use serde::Deserialize;

    pub use super::mapping_reorder_mutation::Variables;
    use crate::shared::MutationOutcome;

    pub const OPERATION_NAME: &str = "GroupReorderMutation";
    pub const QUERY: &str = r#"mutation GroupReorderMutation($id: Int!, $data: ImporterReorderInputType) {
  reorderGroups(id: $id, data: $data) {
    id
    errors {
      message
    }
  }
}"#;

    #[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct ResponseData {
        #[serde(rename = "reorderGroups", default)]
        pub reorder_groups: Option<MutationOutcome>,
    }
}

graphql_operation!(MappingReorderMutation, mapping_reorder_mutation);
graphql_operation!(GroupReorderMutation, group_reorder_mutation);

/// What a reorder applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderTarget {
    /// Individual rules.
    Mappings,
    /// Rule groups.
    Groups,
}

impl ReorderTarget {
    /// Name of the result field the service answers with.
    pub fn field(self) -> &'static str {
        match self {
            ReorderTarget::Mappings => "reorderMappings",
            ReorderTarget::Groups => "reorderGroups",
        }
    }
}

/// Replaces the order of the rules or groups of importer `id`.
pub async fn run(
    client: &ImporterClient,
    target: ReorderTarget,
    id: i64,
    data: ReorderInput,
) -> Result<MutationOutcome, GatewayError> {
    let variables = mapping_reorder_mutation::Variables { id, data };
    let outcome = match target {
        ReorderTarget::Mappings => client
            .post::<MappingReorderMutation>(variables)
            .await?
            .reorder_mappings,
        ReorderTarget::Groups => client
            .post::<GroupReorderMutation>(variables)
            .await?
            .reorder_groups,
    };
    outcome
        .ok_or(GatewayError::MissingField {
            field: target.field(),
        })
        .map(|outcome| outcome.logged(target.field()))
}
