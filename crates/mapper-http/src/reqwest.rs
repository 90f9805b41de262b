use std::pin::Pin;

use buildstructor::buildstructor;
use futures::Future;
use http_body_util::Full;
use reqwest::ClientBuilder;
use tower::{util::BoxCloneService, Service, ServiceBuilder, ServiceExt};

use crate::{
    body::body_to_bytes, HttpRequest, HttpResponse, HttpService, HttpServiceConfig,
    HttpServiceError, HttpServiceFactory, DEFAULT_TIMEOUT,
};

/// Constructs [`HttpService`]s that share one connection pool
#[derive(Clone, Debug)]
pub struct ReqwestServiceFactory {
    config: HttpServiceConfig,
    client: reqwest::Client,
}

#[buildstructor]
impl ReqwestServiceFactory {
    /// Constructs a new [`ReqwestServiceFactory`]
    #[builder]
    pub fn new(
        config: Option<HttpServiceConfig>,
        client: Option<reqwest::Client>,
    ) -> Result<ReqwestServiceFactory, HttpServiceError> {
        let config = config.unwrap_or_default();
        let client = match client {
            Some(client) => client,
            None => build_client(&config)?,
        };
        Ok(ReqwestServiceFactory { config, client })
    }
}

impl HttpServiceFactory for ReqwestServiceFactory {
    /// Creates a new [`HttpService`]
    fn create(&self) -> Result<HttpService, HttpServiceError> {
        let service = ReqwestService::builder()
            .config(self.config.clone())
            .client(self.client.clone())
            .build()
            .map_err(HttpServiceError::from)?;
        Ok(service.boxed_clone())
    }
}

fn build_client(config: &HttpServiceConfig) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .danger_accept_invalid_certs(config.accept_invalid_certificates().unwrap_or_default())
        .build()
}

/// A [`Service`] that wraps a [`reqwest`] client and uses [`http`] constructs for requests and responses
#[derive(Clone, Debug)]
pub struct ReqwestService {
    client: BoxCloneService<reqwest::Request, reqwest::Response, HttpServiceError>,
}

#[buildstructor]
impl ReqwestService {
    /// Constructs a new [`ReqwestService`]
    #[builder]
    pub fn new(
        config: Option<HttpServiceConfig>,
        client: Option<reqwest::Client>,
    ) -> Result<ReqwestService, reqwest::Error> {
        let config = config.unwrap_or_default();
        let client = match client {
            Some(client) => client,
            None => build_client(&config)?,
        };
        let client = ServiceBuilder::new()
            .map_err(HttpServiceError::from)
            .timeout(config.timeout().unwrap_or(DEFAULT_TIMEOUT))
            .service(client)
            .boxed_clone();
        Ok(ReqwestService { client })
    }
}

impl From<reqwest::Error> for HttpServiceError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_body() {
            HttpServiceError::Body(value.into())
        } else if value.is_connect() {
            HttpServiceError::Connect(value.into())
        } else if value.is_timeout() {
            HttpServiceError::TimedOut
        } else if value.is_decode() {
            HttpServiceError::Decode(value.into())
        } else {
            HttpServiceError::Unexpected(value.into())
        }
    }
}

impl Service<HttpRequest> for ReqwestService {
    type Response = HttpResponse;
    type Error = HttpServiceError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.client.poll_ready(cx)
    }

    fn call(&mut self, req: HttpRequest) -> Self::Future {
        // https://docs.rs/tower/latest/tower/trait.Service.html#be-careful-when-cloning-inner-services
        let cloned = self.client.clone();
        let mut client = std::mem::replace(&mut self.client, cloned);
        let fut = async move {
            let mut req = req;
            let bytes = body_to_bytes(req.body_mut())
                .await
                .map_err(|err| HttpServiceError::Body(Box::new(err)))?;
            let req = req.map(move |_| reqwest::Body::from(bytes));
            let req = reqwest::Request::try_from(req)?;
            tracing::trace!(method = %req.method(), url = %req.url(), "sending request");
            let mut resp = http::Response::from(client.call(req).await?);
            let bytes = body_to_bytes(resp.body_mut())
                .await
                .map_err(|err| HttpServiceError::Body(Box::new(err)))?;
            tracing::trace!(status = %resp.status(), length = bytes.len(), "received response");
            Ok(resp.map(|_| Full::new(bytes)))
        };
        Box::pin(fut)
    }
}

impl From<ReqwestService> for HttpService {
    fn from(value: ReqwestService) -> Self {
        value.boxed_clone()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use anyhow::Result;
    use bytes::Bytes;
    use http::HeaderValue;
    use http_body_util::Full;
    use httpmock::{Method, MockServer};
    use rstest::{fixture, rstest};
    use speculoos::prelude::*;
    use tower::{Service, ServiceExt};

    use crate::{
        body::body_to_bytes, HttpService, HttpServiceConfig, HttpServiceError, HttpServiceFactory, ReqwestService,
        ReqwestServiceFactory,
    };

    #[fixture]
    pub fn raw_service() -> HttpService {
        let client = reqwest::Client::default();
        ReqwestService::builder()
            .client(client)
            .build()
            .unwrap()
            .boxed_clone()
    }

    #[fixture]
    pub fn timeout_service() -> HttpService {
        ReqwestServiceFactory::builder()
            .config(
                HttpServiceConfig::builder()
                    .timeout(Duration::from_millis(100))
                    .build(),
            )
            .build()
            .unwrap()
            .create()
            .unwrap()
    }

    #[rstest]
    #[case::raw_service(raw_service(), None)]
    #[case::timeout_service_fast_response(timeout_service(), None)]
    #[case::timeout_service_slow_response(timeout_service(), Some(Duration::from_millis(300)))]
    #[tokio::test]
    pub async fn make_a_request(
        #[case] mut service: HttpService,
        #[case] request_length: Option<Duration>,
    ) -> Result<()> {
        let server = MockServer::start_async().await;
        let uri = server.url("/graphql");

        let mock = server.mock(|when, then| {
            when.method(Method::POST)
                .path("/graphql")
                .header("authorization", "Bearer secret")
                .body("{\"query\":\"{ list { id } }\"}");

            let then = then
                .status(200)
                .header("content-type", "application/json")
                .body("{\"data\":{\"list\":[]}}");
            if let Some(request_length) = request_length {
                then.delay(request_length);
            }
        });

        let request = http::Request::builder()
            .uri(uri)
            .method(http::Method::POST)
            .header("authorization", "Bearer secret")
            .body(Full::new(Bytes::from_static(b"{\"query\":\"{ list { id } }\"}")))?;

        let resp = service.call(request).await;

        mock.assert_calls(1);

        if request_length.is_some() {
            assert_that!(resp)
                .is_err()
                .matches(|err| matches!(err, HttpServiceError::TimedOut));
        } else {
            let mut resp = resp?;
            assert_that!(resp.headers().get("content-type"))
                .is_some()
                .is_equal_to(&HeaderValue::from_static("application/json"));

            let body = body_to_bytes(resp.body_mut()).await?;
            assert_that!(body).is_equal_to(Bytes::from_static(b"{\"data\":{\"list\":[]}}"));
        }

        Ok(())
    }
}
