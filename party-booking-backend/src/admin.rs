use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::http::{HeaderName, HeaderValue};
use axum_extra::headers::{self, Header};
use axum_extra::TypedHeader;
use itertools::Itertools as _;
use sha2::{Digest as _, Sha256};
use tracing::warn;

use crate::error::AppError;

pub static X_ADMIN_TOKEN_HEADER_NAME: HeaderName = HeaderName::from_static("x-admin-token");

/// Shared secret sent by the admin page.
pub struct XAdminToken(pub String);

impl Header for XAdminToken {
    fn name() -> &'static HeaderName {
        &X_ADMIN_TOKEN_HEADER_NAME
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values
            .exactly_one()
            .map_err(|_e| headers::Error::invalid())?;
        let value = value.to_str().map_err(|_e| headers::Error::invalid())?;
        Ok(Self(value.to_owned()))
    }

    fn encode<E>(&self, values: &mut E)
    where
        E: Extend<HeaderValue>,
    {
        if let Ok(value) = HeaderValue::from_str(&self.0) {
            values.extend(core::iter::once(value));
        }
    }
}

/// Decides whether a presented admin token grants access.
///
/// Only the SHA-256 digest of the secret is kept, and tokens are compared by
/// digest so the comparison does not stop at the first differing byte of the
/// secret itself.
#[derive(Clone)]
pub struct AdminGate {
    secret_digest: Option<[u8; 32]>,
}

impl AdminGate {
    /// An empty secret counts as not configured.
    #[must_use]
    pub fn new(secret: Option<&str>) -> Self {
        Self {
            secret_digest: secret.filter(|secret| !secret.is_empty()).map(digest),
        }
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.secret_digest.is_some()
    }

    /// A missing secret is a server fault and is reported before the token is
    /// even looked at.
    pub fn authorize(&self, token: Option<&str>) -> Result<(), AppError> {
        let Some(secret_digest) = &self.secret_digest else {
            return Err(AppError::AdminNotConfigured);
        };

        match token {
            Some(token) if !token.is_empty() && digest(token) == *secret_digest => Ok(()),
            _ => Err(AppError::Unauthorized),
        }
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

/// Extracting this succeeds only for requests carrying the admin token.
pub struct AdminAccess;

#[async_trait]
impl<S> FromRequestParts<S> for AdminAccess
where
    AdminGate: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let gate = AdminGate::from_ref(state);
        let token =
            match Option::<TypedHeader<XAdminToken>>::from_request_parts(parts, state).await {
                Ok(token) => token,
                Err(infallible) => match infallible {},
            };

        gate.authorize(token.as_ref().map(|TypedHeader(XAdminToken(token))| token.as_str()))
            .inspect_err(|error| warn!("refused admin access to {}: {error}", parts.uri))?;
        Ok(Self)
    }
}
