// Credential extraction - bearer token + server OAuth client identity
use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use tracing::warn;

use super::scopes::RELAY_SCOPES;
use crate::{
    api::AppState,
    config::OAuthClient,
    errors::{RelayError, RelayResult},
};

const BEARER_PREFIX: &str = "bearer ";

/// Per-request credential handed to the Drive client. Never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub token: String,
    pub client_id: String,
    pub client_secret: String,
    pub scopes: &'static [&'static str],
}

impl Credential {
    pub fn new(token: impl Into<String>, client: &OAuthClient) -> Self {
        Self {
            token: token.into(),
            client_id: client.client_id.clone(),
            client_secret: client.client_secret.clone(),
            scopes: RELAY_SCOPES,
        }
    }

    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"[redacted]")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .field("scopes", &self.scopes.len())
            .finish()
    }
}

/// Pulls the raw token out of an `Authorization` value.
///
/// The scheme match is case-insensitive and the token is everything after the
/// first space.
pub fn parse_bearer(value: &str) -> Option<&str> {
    let prefix = value.get(..BEARER_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(BEARER_PREFIX) {
        return None;
    }

    let token = &value[BEARER_PREFIX.len()..];
    if token.trim().is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Builds a credential from request headers.
///
/// The header is checked before the server configuration, so a caller without
/// a bearer token always sees 401 even on a misconfigured server.
pub fn extract_credential(
    headers: &header::HeaderMap,
    oauth_client: Option<&OAuthClient>,
) -> RelayResult<Credential> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_bearer)
        .ok_or_else(|| {
            RelayError::Unauthorized("Authorization header missing or invalid".to_string())
        })?;

    let client = oauth_client.ok_or_else(|| {
        RelayError::Configuration(
            "Server is missing Google OAuth client configuration".to_string(),
        )
    })?;

    Ok(Credential::new(token, client))
}

impl FromRequest for Credential {
    type Error = RelayError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let oauth_client = req
            .app_data::<web::Data<AppState>>()
            .and_then(|state| state.config.oauth_client.as_ref());

        let result = extract_credential(req.headers(), oauth_client);
        if let Err(e) = &result {
            warn!(path = %req.path(), "🔒 Rejected request: {}", e);
        }
        ready(result)
    }
}
