use http::{
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
    HeaderMap, HeaderValue,
};

use crate::GatewayError;

const JSON_CONTENT_TYPE: &str = "application/json";
const CLIENT_NAME: &str = "mapper-client";

/// Builds the [HeaderMap] attached to every request against the importer service.
///
/// `Authorization` is always present: `Bearer <token>` when a token is
/// configured, an empty value otherwise. A missing token is not an error.
pub fn build(token: Option<&str>, client_version: &str) -> Result<HeaderMap, GatewayError> {
    let mut headers = HeaderMap::new();

    headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

    tracing::debug!(?client_version);
    let user_agent = HeaderValue::from_str(&format!("{CLIENT_NAME}/{client_version}"))?;
    headers.insert(USER_AGENT, user_agent);

    let mut authorization = match token.filter(|token| !token.is_empty()) {
        Some(token) => HeaderValue::from_str(&format!("Bearer {token}"))?,
        None => HeaderValue::from_static(""),
    };
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use http::header::{AUTHORIZATION, USER_AGENT};
    use rstest::rstest;
    use speculoos::prelude::*;

    use super::build;

    #[rstest]
    #[case::configured(Some("abc123"), "Bearer abc123")]
    #[case::absent(None, "")]
    #[case::empty(Some(""), "")]
    fn it_builds_the_authorization_header(#[case] token: Option<&str>, #[case] expected: &str) {
        let headers = build(token, "0.1.0").unwrap();
        let authorization = headers.get(AUTHORIZATION).unwrap();
        assert_that!(authorization.to_str().unwrap()).is_equal_to(expected);
        assert!(authorization.is_sensitive());
    }

    #[test]
    fn it_identifies_the_client() {
        let headers = build(None, "1.2.3").unwrap();
        assert_that!(headers.get(USER_AGENT).unwrap().to_str().unwrap())
            .is_equal_to("mapper-client/1.2.3");
    }

    #[test]
    fn tokens_with_newlines_are_rejected() {
        assert!(build(Some("abc\ndef"), "0.1.0").is_err());
    }
}
