use auth::TokenRejection;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::auth::errors::AuthError;
use crate::inbound::http::router::AppState;

const BEARER_SCHEME: &str = "Bearer";

/// Middleware that admits requests carrying a valid access token.
///
/// The resulting `AuthenticatedSubject` is stored in request extensions for
/// handlers to extract.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let subject = bearer_token(req.headers())
        .and_then(|token| state.access_guard.authenticate(token))
        .map_err(|e| {
            tracing::warn!(reason = ?e.kind(), "Request rejected by access guard");
            ApiError::from(e).into_response()
        })?;

    req.extensions_mut().insert(subject);

    Ok(next.run(req).await)
}

/// Extract the bearer token from the `Authorization` header.
///
/// The scheme is matched case-insensitively. A missing header or a different
/// scheme yields `None`; a header that is not valid visible ASCII is malformed.
pub fn bearer_token(headers: &HeaderMap) -> Result<Option<&str>, AuthError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value.to_str().map_err(|_| {
        AuthError::Token(TokenRejection::Malformed(
            "authorization header is not valid ASCII".to_string(),
        ))
    })?;

    Ok(value
        .trim_start()
        .split_once(' ')
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case(BEARER_SCHEME))
        .map(|(_, token)| token.trim()))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        assert!(matches!(bearer_token(&headers), Ok(None)));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(matches!(bearer_token(&headers), Ok(None)));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert!(matches!(bearer_token(&headers), Ok(Some("abc.def.ghi"))));
    }

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        let mut headers = HeaderMap::new();

        for value in ["bearer abc.def.ghi", "BEARER abc.def.ghi", "BeArEr  abc.def.ghi"] {
            headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
            assert!(
                matches!(bearer_token(&headers), Ok(Some("abc.def.ghi"))),
                "{value}"
            );
        }

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearerabc"));
        assert!(matches!(bearer_token(&headers), Ok(None)));
    }

    #[test]
    fn test_non_ascii_header_is_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xfftoken").unwrap(),
        );

        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::Token(TokenRejection::Malformed(_)))
        ));
    }
}
