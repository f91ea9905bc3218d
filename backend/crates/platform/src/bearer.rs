//! Bearer Token Header Parsing
//!
//! `Authorization: Bearer <token>` (RFC 6750 §2.1).

use http::{HeaderMap, header};

/// Error when an Authorization header is present but unusable
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    #[error("Authorization header is not valid ASCII")]
    NotAscii,
    #[error("Authorization scheme is not Bearer")]
    WrongScheme,
    #[error("Bearer token is empty")]
    Empty,
}

/// Extract the bearer token from request headers
///
/// ## Returns
/// * `Ok(None)` - no Authorization header at all (anonymous request)
/// * `Ok(Some(token))` - well-formed bearer credential
/// * `Err(BearerError)` - header present but malformed
///
/// The scheme name is matched case-insensitively.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<Option<String>, BearerError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value.to_str().map_err(|_| BearerError::NotAscii)?.trim();

    let (scheme, token) = value.split_once(' ').ok_or(BearerError::WrongScheme)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerError::WrongScheme);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(BearerError::Empty);
    }

    Ok(Some(token.to_string()))
}
