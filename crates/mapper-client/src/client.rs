use std::{fmt, sync::Arc};

use buildstructor::Builder;
use derive_getters::Getters;
use graphql_client::GraphQLQuery;
use mapper_graphql::{GraphQLLayer, GraphQLRequest};
use mapper_http::{
    extend_headers::ExtendHeadersLayer, HttpServiceConfig, HttpServiceFactory,
    ReqwestServiceFactory,
};
use tower::{Service, ServiceBuilder, ServiceExt};
use url::Url;

use crate::{headers, GatewayError};

/// Where the importer service lives and how to authenticate against it.
#[derive(Clone, Builder, Getters)]
pub struct ClientConfig {
    endpoint: Url,
    token: Option<String>,
    http_config: Option<HttpServiceConfig>,
    client_version: Option<String>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("http_config", &self.http_config)
            .finish()
    }
}

/// Represents a client for making requests to the importer administration API.
///
/// A fresh transport is built for every operation; only the connection pool
/// inside the [`HttpServiceFactory`] is shared.
#[derive(Clone)]
pub struct ImporterClient {
    config: ClientConfig,
    http_service_factory: Arc<dyn HttpServiceFactory + Send + Sync>,
}

impl fmt::Debug for ImporterClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImporterClient")
            .field("config", &self.config)
            .finish()
    }
}

impl ImporterClient {
    /// Construct a new [`ImporterClient`] backed by `reqwest`.
    pub fn new(config: ClientConfig) -> Result<ImporterClient, GatewayError> {
        let factory = ReqwestServiceFactory::builder()
            .config(config.http_config.clone().unwrap_or_default())
            .build()?;
        Ok(ImporterClient::with_factory(config, factory))
    }

    /// Construct a new [`ImporterClient`] that takes its transport from `factory`.
    pub fn with_factory(
        config: ClientConfig,
        factory: impl HttpServiceFactory + Send + Sync + 'static,
    ) -> ImporterClient {
        ImporterClient {
            config,
            http_service_factory: Arc::new(factory),
        }
    }

    /// The endpoint every operation is sent to.
    pub fn endpoint(&self) -> &Url {
        &self.config.endpoint
    }

    /// Client method for making a GraphQL request.
    ///
    /// Sends exactly one operation and returns its `data`. Failures are logged
    /// before they are returned.
    pub async fn post<Q>(&self, variables: Q::Variables) -> Result<Q::ResponseData, GatewayError>
    where
        Q: GraphQLQuery + Send + Sync + 'static,
        Q::Variables: Send,
        Q::ResponseData: Send + Sync + fmt::Debug,
    {
        let result = self.send::<Q>(variables).await;
        if let Err(error) = &result {
            tracing::error!(endpoint = %self.config.endpoint, %error, "importer service request failed");
        }
        result
    }

    async fn send<Q>(&self, variables: Q::Variables) -> Result<Q::ResponseData, GatewayError>
    where
        Q: GraphQLQuery + Send + Sync + 'static,
        Q::Variables: Send,
        Q::ResponseData: Send + Sync + fmt::Debug,
    {
        let client_version = self
            .config
            .client_version
            .as_deref()
            .unwrap_or(env!("CARGO_PKG_VERSION"));
        let headers = headers::build(self.config.token.as_deref(), client_version)?;
        let http_service = self.http_service_factory.create()?;

        let mut service = ServiceBuilder::new()
            .layer(GraphQLLayer::new(self.config.endpoint.clone()))
            .layer(ExtendHeadersLayer::new(headers))
            .service(http_service);

        let service = ServiceExt::<GraphQLRequest<Q>>::ready(&mut service).await?;
        let data = service.call(GraphQLRequest::<Q>::new(variables)).await?;
        tracing::trace!(response_data = ?data);
        Ok(data)
    }
}
