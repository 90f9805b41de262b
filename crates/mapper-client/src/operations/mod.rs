/// Implements [`graphql_client::GraphQLQuery`] for an operation whose document,
/// `Variables` and `ResponseData` live in the named module.
/// The module follows the naming `graphql_client`'s derive would produce:
/// `ImporterListQuery` is described by `importer_list_query`.
macro_rules! graphql_operation {
    ($operation:ident, $module:ident) => {
        pub(crate) struct $operation;

        impl graphql_client::GraphQLQuery for $operation {
            type Variables = $module::Variables;
            type ResponseData = $module::ResponseData;

            fn build_query(
                variables: Self::Variables,
            ) -> graphql_client::QueryBody<Self::Variables> {
                graphql_client::QueryBody {
                    variables,
                    query: $module::QUERY,
                    operation_name: $module::OPERATION_NAME,
                }
            }
        }
    };
}

/// "bundle" queries: destination fields an importer can map onto
pub mod bundle;

/// "importer" queries and mutations
pub mod importer;

/// "mapping" queries and mutations
pub mod mapping;
