//! Admin session tokens and cookies.
//!
//! Sessions are stateless: a login issues an HS256-signed token carrying the
//! admin's identity claims, transported in an `HttpOnly` cookie with a fixed
//! 12-hour lifetime. Verification is a pure computation over the token and
//! the signing secret; nothing is stored server-side, so logout simply
//! overwrites the cookie with an immediately-expired one.

use axum_extra::extract::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shuk_core::AdminUserId;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "admin_session";

/// Session lifetime in seconds (12 hours).
pub const SESSION_TTL_SECONDS: i64 = 12 * 60 * 60;

/// Identity claims embedded in every admin session token.
///
/// Only identity and the super-admin flag travel in the token; the full
/// permission set is attached per-request from the account record, so
/// permission changes take effect without reissuing tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// The admin's account ID.
    pub id: String,
    pub username: String,
    pub is_super_admin: bool,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Errors from token issuance.
///
/// Verification deliberately has no error type: every failure mode resolves
/// to "not authenticated" so callers cannot leak which check failed.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The signing secret is not configured. A deployment fault, not a
    /// request fault: issuance must refuse outright rather than degrade to
    /// an unsigned or weakly-signed token.
    #[error("admin session signing secret is not configured")]
    MissingSecret,

    /// Signing failed inside the JWT library.
    #[error("token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Issues, verifies, and revokes admin session credentials.
///
/// Pure over (token, current time, signing secret) -- no ambient state, no
/// I/O. Construct once from configuration and share via application state.
#[derive(Clone)]
pub struct SessionGuard {
    secret: Option<SecretString>,
    secure_cookies: bool,
}

impl SessionGuard {
    /// Create a guard from the configured signing secret.
    ///
    /// `secure_cookies` should be true only for production deployments;
    /// it controls the cookie's `Secure` attribute.
    #[must_use]
    pub const fn new(secret: Option<SecretString>, secure_cookies: bool) -> Self {
        Self {
            secret,
            secure_cookies,
        }
    }

    /// Sign a session token for an already-authenticated admin.
    ///
    /// The token carries the identity claims plus issued-at/expiry and is
    /// valid for exactly [`SESSION_TTL_SECONDS`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingSecret`] before any signing attempt
    /// when no secret is configured, or [`SessionError::Signing`] if the
    /// JWT library fails.
    pub fn issue_token(
        &self,
        id: AdminUserId,
        username: &str,
        is_super_admin: bool,
    ) -> Result<String, SessionError> {
        let secret = self.secret.as_ref().ok_or(SessionError::MissingSecret)?;

        let now = chrono::Utc::now().timestamp();
        let claims = AdminClaims {
            id: id.to_string(),
            username: username.to_string(),
            is_super_admin,
            iat: now,
            exp: now + SESSION_TTL_SECONDS,
        };

        Ok(encode(
            &Header::default(), // HS256
            &claims,
            &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
        )?)
    }

    /// Verify a token string extracted from the request cookie.
    ///
    /// Returns `None` on any failure -- missing secret, malformed token,
    /// invalid signature, or expiry. The failure modes are indistinguishable
    /// to the caller.
    #[must_use]
    pub fn verify_token(&self, token: &str) -> Option<AdminClaims> {
        let secret = self.secret.as_ref()?;

        decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            &Validation::default(), // HS256, validates exp
        )
        .ok()
        .map(|data| data.claims)
    }

    /// Build the `Set-Cookie` value carrying a freshly issued token.
    #[must_use]
    pub fn login_cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE_NAME, token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure_cookies)
            .max_age(time::Duration::seconds(SESSION_TTL_SECONDS))
            .build()
    }

    /// Build the cookie-clearing `Set-Cookie` value for logout.
    ///
    /// Always succeeds, valid session or not: the cookie is overwritten with
    /// an empty value and zero max-age so the client discards it immediately.
    #[must_use]
    pub fn logout_cookie(&self) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE_NAME, ""))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure_cookies)
            .max_age(time::Duration::ZERO)
            .build()
    }
}
