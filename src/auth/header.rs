use axum::http::{HeaderMap, header};

use crate::core::error::Error;

const BEARER: &str = "Bearer";
const API_KEY: &str = "ApiKey";

/// Pulls the token out of `Authorization: Bearer <token>`.
///
/// Used for both access and refresh tokens; what the token is gets decided by the caller.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Result<&str, Error> {
    credential(headers, BEARER)
}

/// Pulls the key out of `Authorization: ApiKey <key>`.
pub(crate) fn api_key(headers: &HeaderMap) -> Result<&str, Error> {
    credential(headers, API_KEY)
}

fn credential<'a>(headers: &'a HeaderMap, scheme: &str) -> Result<&'a str, Error> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(Error::MissingHeader)?
        .to_str()
        .map_err(|_| Error::MalformedHeader)?;

    if value.trim().is_empty() {
        return Err(Error::MissingHeader);
    }

    let mut parts = value.split_whitespace();

    match (parts.next(), parts.next(), parts.next()) {
        (Some(found), Some(credential), None) if found == scheme => Ok(credential),
        _ => Err(Error::MalformedHeader),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_authorization(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token() {
        let headers = with_authorization("Bearer abc123");

        assert_eq!(bearer_token(&headers).unwrap(), "abc123");
    }

    #[test]
    fn test_bearer_token_extra_spacing() {
        let headers = with_authorization("Bearer  abc123  ");

        assert_eq!(bearer_token(&headers).unwrap(), "abc123");
    }

    #[test]
    fn test_bearer_wrong_scheme() {
        let headers = with_authorization("Basic xyz");

        assert!(matches!(bearer_token(&headers), Err(Error::MalformedHeader)));
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        let headers = with_authorization("bearer abc123");

        assert!(matches!(bearer_token(&headers), Err(Error::MalformedHeader)));
    }

    #[test]
    fn test_bearer_wrong_token_count() {
        for value in ["Bearer", "Bearer abc 123", "abc123"] {
            let headers = with_authorization(value);

            assert!(matches!(bearer_token(&headers), Err(Error::MalformedHeader)));
        }
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();

        assert!(matches!(bearer_token(&headers), Err(Error::MissingHeader)));
        assert!(matches!(api_key(&headers), Err(Error::MissingHeader)));
    }

    #[test]
    fn test_empty_header_is_missing() {
        let headers = with_authorization("");

        assert!(matches!(bearer_token(&headers), Err(Error::MissingHeader)));
    }

    #[test]
    fn test_api_key() {
        let headers = with_authorization("ApiKey f271c81ff7084ee5b99a5091b42d486e");

        assert_eq!(
            api_key(&headers).unwrap(),
            "f271c81ff7084ee5b99a5091b42d486e"
        );
    }

    #[test]
    fn test_schemes_are_not_interchangeable() {
        let bearer = with_authorization("Bearer abc123");
        let key = with_authorization("ApiKey abc123");

        assert!(matches!(api_key(&bearer), Err(Error::MalformedHeader)));
        assert!(matches!(bearer_token(&key), Err(Error::MalformedHeader)));
    }
}
