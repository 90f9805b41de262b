#![warn(missing_docs)]

//! Provides [`tower`] implementations for the HTTP requests made against an importer service

use std::{fmt::Debug, str::Utf8Error, time::Duration};

/// Install ring as the default rustls crypto provider. This runs automatically
/// as a global constructor in every binary that links mapper-http (directly or
/// transitively).
#[ctor::ctor]
fn install_ring_crypto_provider() {
    // the provider may already be installed, which is the only way this errors
    rustls::crypto::ring::default_provider()
        .install_default()
        .ok();
}

use buildstructor::Builder;
use bytes::Bytes;
use derive_getters::Getters;
pub use http_body::Body;
pub use http_body_util::{BodyExt, Empty, Full};
use tower::{timeout::error::Elapsed, util::BoxCloneService};

pub mod body;
mod error;
pub mod extend_headers;
mod reqwest;

pub use error::HttpServiceError;
pub use reqwest::{ReqwestService, ReqwestServiceFactory};

/// Ease-of-use synonym for the request type this crate operates on
pub type HttpRequest = http::Request<Full<Bytes>>;
/// Ease-of-use synonym for the response type this crate operates on
pub type HttpResponse<T = Full<Bytes>> = http::Response<T>;
/// Ease-of-use synonym for the [`tower::Service`] type this crate provides
pub type HttpService = BoxCloneService<HttpRequest, HttpResponse, HttpServiceError>;

/// Timeout applied when [`HttpServiceConfig`] does not set one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

/// Object that creates an [`HttpService`] on-demand.
///
/// Every gateway operation asks for a fresh service, so that one request never
/// shares middleware state with another.
pub trait HttpServiceFactory {
    /// Produces an [`HttpService`]
    fn create(&self) -> Result<HttpService, HttpServiceError>;
}

/// Configuration object for constructing an [`HttpService`].
/// This is intended to be agnostic to the underlying implementation
#[derive(Clone, Debug, Builder, Default, Getters)]
pub struct HttpServiceConfig {
    accept_invalid_certificates: Option<bool>,
    timeout: Option<Duration>,
}

impl From<Box<dyn std::error::Error + Send + Sync>> for HttpServiceError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        match err.downcast::<Elapsed>() {
            Ok(_) => HttpServiceError::TimedOut,
            Err(err) => match err.downcast::<HttpServiceError>() {
                Ok(err) => *err,
                Err(err) => match err.downcast::<::reqwest::Error>() {
                    Ok(err) => HttpServiceError::from(*err),
                    Err(err) => HttpServiceError::Unexpected(err),
                },
            },
        }
    }
}

impl From<Utf8Error> for HttpServiceError {
    fn from(value: Utf8Error) -> Self {
        HttpServiceError::Decode(Box::new(value))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use speculoos::prelude::*;
    use tower::timeout::error::Elapsed;

    use super::{HttpServiceConfig, HttpServiceError};

    #[test]
    fn elapsed_errors_become_timeouts() {
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(Elapsed::new());
        assert_that!(HttpServiceError::from(boxed).is_timeout()).is_true();
    }

    #[test]
    fn boxed_service_errors_are_unwrapped() {
        let inner = HttpServiceError::BadStatusCode {
            status_code: http::StatusCode::BAD_GATEWAY,
            data: bytes::Bytes::from_static(b"upstream down"),
        };
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(inner);
        assert_that!(HttpServiceError::from(boxed).is_status()).is_true();
    }

    #[test]
    fn config_builder_sets_timeout() {
        let config = HttpServiceConfig::builder()
            .timeout(Duration::from_secs(5))
            .build();
        assert_that!(*config.timeout()).is_equal_to(Some(Duration::from_secs(5)));
        assert_that!(*config.accept_invalid_certificates()).is_none();
    }
}
