use bytes::Bytes;
use http::StatusCode;

/// Failures produced by an [`crate::HttpService`]
#[derive(thiserror::Error, Debug)]
pub enum HttpServiceError {
    /// The server answered with a status the caller refuses to decode
    #[error("Bad Status code: {status_code}")]
    BadStatusCode {
        /// status of the response
        status_code: StatusCode,
        /// raw response body
        data: Bytes,
    },
    /// The request could not be assembled
    #[error("HTTP Error: {:?}", .0)]
    Http(#[from] http::Error),
    /// The request did not complete before the configured timeout
    #[error("Request timed out")]
    TimedOut,
    /// A body could not be decoded
    #[error("Decode error: {:?}", .0)]
    Decode(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// A body could not be read or written
    #[error("Body error: {:?}", .0)]
    Body(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// No connection could be established with the endpoint
    #[error("Connect error: {:?}", .0)]
    Connect(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// Anything the transport reports that is not covered above
    #[error("Unexpected HTTP error: {:?}", .0)]
    Unexpected(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl HttpServiceError {
    /// Whether the endpoint could not be reached at all
    pub fn is_connect(&self) -> bool {
        matches!(self, HttpServiceError::Connect(_))
    }
    /// Whether the request ran past its timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpServiceError::TimedOut)
    }
    /// Whether a body failed to decode
    pub fn is_decode(&self) -> bool {
        matches!(self, HttpServiceError::Decode(_))
    }
    /// Whether the server answered with a rejected status code
    pub fn is_status(&self) -> bool {
        matches!(self, HttpServiceError::BadStatusCode { .. })
    }
}
