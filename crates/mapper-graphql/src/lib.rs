#![warn(missing_docs)]

//! Provides GraphQL Middleware for HTTP Services

use std::{fmt, future::Future, pin::Pin, str::FromStr};

use bytes::Bytes;
use graphql_client::GraphQLQuery;
use http::{uri::InvalidUri, HeaderValue, Method, StatusCode, Uri};
use http_body_util::Full;
use mapper_http::{HttpRequest, HttpResponse};
use serde::Deserialize;
use tower::{Layer, Service};
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Fragments that servers use to report a missing or rejected bearer token
const CREDENTIAL_REJECTIONS: [&str; 3] = ["Invalid credentials", "Unauthorized", "unauthorized"];

/// Some servers tuck the real messages into `extensions.response.body.errors`
#[derive(Deserialize, Debug, Clone)]
struct NestedErrorBody {
    body: NestedErrorList,
}

#[derive(Deserialize, Debug, Clone)]
struct NestedErrorList {
    errors: Vec<NestedError>,
}

#[derive(Deserialize, Debug, Clone)]
struct NestedError {
    message: String,
}

/// Flattens GraphQL errors into display ready messages
fn friendly_messages(errors: &[graphql_client::Error]) -> Vec<String> {
    let mut messages = Vec::with_capacity(errors.len());
    for err in errors {
        let nested = err
            .extensions
            .as_ref()
            .and_then(|extensions| extensions.get("response"))
            .and_then(|response| serde_json::from_value::<NestedErrorBody>(response.clone()).ok());
        match nested {
            Some(nested) => messages.extend(nested.body.errors.into_iter().map(|e| e.message)),
            None => messages.push(err.message.clone()),
        }
    }
    messages
}

fn rejects_credentials(messages: &[String]) -> bool {
    messages.iter().any(|message| {
        CREDENTIAL_REJECTIONS
            .iter()
            .any(|fragment| message.contains(fragment))
    })
}

/// Re-export / renamed type alias for [`graphql_client::Response`]
pub type GraphQLResponse<T> = graphql_client::Response<T>;

/// Errors that may occur from using a [`GraphQLService`]
#[derive(thiserror::Error, Debug)]
pub enum GraphQLServiceError<T: Send + Sync + fmt::Debug> {
    /// There was no data field provided in the response
    #[error("No data field provided")]
    NoData(Vec<graphql_client::Error>),
    /// The response returned some data, but there were errors
    #[error("Data was returned, but with errors: {}", friendly_errors_detail.join(" "))]
    PartialError {
        /// The partial data returned
        data: T,
        /// The GraphQL errors that were produced
        errors: Vec<graphql_client::Error>,
        /// display ready decoration of `errors`
        friendly_errors_detail: Vec<String>,
    },
    /// The server refused the bearer token attached to the request
    #[error("Invalid credentials provided. Check the token configured for this endpoint.")]
    InvalidCredentials,
    /// Data serialization error
    #[error("Serialization error")]
    Serialization(serde_json::Error),
    /// Data deserialization error
    #[error("Deserialization error")]
    Deserialization {
        /// The source error
        error: serde_json::Error,
        /// The data that was attempted to be deserialized
        data: Bytes,
        /// The [`StatusCode`] of the request
        status_code: StatusCode,
    },
    /// [`http`]-related error, probably from header-related tasks
    #[error("HTTP error: {:?}", .0)]
    Http(#[from] http::Error),
    /// Error that occurs from a failure to parse a [`Uri`] from a [`Url`]
    #[error("Unable to convert URL to URI.")]
    InvalidUri(#[from] InvalidUri),
    /// Errors that occur as a result of the underlying HTTP service failing
    #[error("Upstream service error: {:?}", .0)]
    UpstreamService(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Wrapper around [`GraphQLQuery::Variables`]
/// This type requires something more concrete around it to be used appropriately
pub struct GraphQLRequest<Q: GraphQLQuery> {
    variables: Q::Variables,
}

impl<Q> fmt::Debug for GraphQLRequest<Q>
where
    Q: GraphQLQuery,
    Q::Variables: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{:?}", self.variables)
    }
}

impl<Q> PartialEq for GraphQLRequest<Q>
where
    Q: GraphQLQuery,
    Q::Variables: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.variables == other.variables
    }
}

impl<Q: GraphQLQuery> GraphQLRequest<Q> {
    /// Constructs a new [`GraphQLRequest`]
    pub fn new(variables: Q::Variables) -> GraphQLRequest<Q> {
        GraphQLRequest { variables }
    }
    /// Consumes the [`GraphQLRequest`] and produces the inner [`GraphQLQuery::Variables`] object
    pub fn into_inner(self) -> Q::Variables {
        self.variables
    }
}

/// [`Layer`] that wraps a service with GraphQL middleware bound to one endpoint
#[derive(Clone, Debug)]
pub struct GraphQLLayer {
    endpoint: Url,
}

impl GraphQLLayer {
    /// Constructs a new [`GraphQLLayer`]
    pub fn new(endpoint: Url) -> GraphQLLayer {
        GraphQLLayer { endpoint }
    }
}

impl<S> Layer<S> for GraphQLLayer {
    type Service = GraphQLService<S>;
    fn layer(&self, inner: S) -> Self::Service {
        GraphQLService::new(self.endpoint.clone(), inner)
    }
}

/// Middleware that wraps a service in GraphQL functionality
#[derive(Clone, Debug)]
pub struct GraphQLService<S> {
    inner: S,
    endpoint: Url,
}

impl<S> GraphQLService<S> {
    /// Constructs a new [`GraphQLService`]
    pub fn new(endpoint: Url, inner: S) -> GraphQLService<S> {
        GraphQLService { endpoint, inner }
    }
}

impl<Q, S> Service<GraphQLRequest<Q>> for GraphQLService<S>
where
    Q: GraphQLQuery + Send + Sync + 'static,
    Q::Variables: Send,
    Q::ResponseData: Send + Sync + fmt::Debug,
    S: Service<HttpRequest, Response = HttpResponse> + Clone + Send + 'static,
    S::Future: Send,
    S::Error: std::error::Error + Send + Sync + 'static,
{
    type Response = Q::ResponseData;
    type Error = GraphQLServiceError<Q::ResponseData>;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        tower::Service::poll_ready(&mut self.inner, cx)
            .map_err(|err| GraphQLServiceError::UpstreamService(Box::new(err)))
    }

    fn call(&mut self, req: GraphQLRequest<Q>) -> Self::Future {
        // https://docs.rs/tower/latest/tower/trait.Service.html#be-careful-when-cloning-inner-services
        let cloned = self.inner.clone();
        let mut client = std::mem::replace(&mut self.inner, cloned);

        let url = self.endpoint.clone();

        let fut = async move {
            let body = Q::build_query(req.into_inner());
            tracing::debug!(operation = body.operation_name, endpoint = %url, "sending GraphQL operation");
            let body_bytes =
                Bytes::from(serde_json::to_vec(&body).map_err(GraphQLServiceError::Serialization)?);
            let req = http::Request::builder()
                .uri(Uri::from_str(url.as_str())?)
                .method(Method::POST)
                .header(
                    http::header::CONTENT_TYPE,
                    HeaderValue::from_static(JSON_CONTENT_TYPE),
                )
                .body(Full::new(body_bytes))
                .map_err(GraphQLServiceError::Http)?;
            let resp = client
                .call(req)
                .await
                .map_err(|err| GraphQLServiceError::UpstreamService(Box::new(err)))?;
            let status_code = resp.status();
            let body = body_of(resp).await?;
            let graphql_response: GraphQLResponse<Q::ResponseData> =
                match serde_json::from_slice(&body) {
                    Ok(graphql_response) => graphql_response,
                    Err(_)
                        if status_code == StatusCode::UNAUTHORIZED
                            || status_code == StatusCode::FORBIDDEN =>
                    {
                        return Err(GraphQLServiceError::InvalidCredentials);
                    }
                    Err(error) => {
                        return Err(GraphQLServiceError::Deserialization {
                            error,
                            data: body,
                            status_code,
                        });
                    }
                };

            match (graphql_response.errors, graphql_response.data) {
                (Some(errors), data) if !errors.is_empty() => {
                    let friendly_errors_detail = friendly_messages(&errors);
                    if rejects_credentials(&friendly_errors_detail) {
                        return Err(GraphQLServiceError::InvalidCredentials);
                    }
                    match data {
                        Some(data) => Err(GraphQLServiceError::PartialError {
                            data,
                            errors,
                            friendly_errors_detail,
                        }),
                        None => Err(GraphQLServiceError::NoData(errors)),
                    }
                }
                (_, data) => data.ok_or_else(|| GraphQLServiceError::NoData(Vec::default())),
            }
        };
        Box::pin(fut)
    }
}

async fn body_of<T: Send + Sync + fmt::Debug>(
    mut resp: HttpResponse,
) -> Result<Bytes, GraphQLServiceError<T>> {
    mapper_http::body::body_to_bytes(resp.body_mut())
        .await
        .map_err(|err| GraphQLServiceError::UpstreamService(Box::new(err)))
}
