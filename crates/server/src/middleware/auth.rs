//! Authentication extractors for admin request handlers.
//!
//! The session cookie only vouches for identity and the super-admin flag;
//! the `is_active` flag and the permission set are attached fresh from the
//! account store on every request, so deactivations and permission changes
//! take effect immediately.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use shuk_core::{AdminIdentity, AdminUserId};

use crate::db::AdminUserRepository;
use crate::services::session::{AdminClaims, SESSION_COOKIE_NAME};
use crate::state::AppState;

/// Error returned when admin authentication fails.
///
/// Token problems (missing, malformed, expired, bad signature) all collapse
/// to `Unauthorized`; which check failed is never disclosed.
#[derive(Debug, PartialEq, Eq)]
pub enum AdminAuthRejection {
    /// Not authenticated.
    Unauthorized,
    /// Authenticated, but not a super admin.
    Forbidden,
    /// The account store could not be reached.
    Internal,
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            Self::Forbidden => {
                (StatusCode::FORBIDDEN, "Super admin access required").into_response()
            }
            Self::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

/// Verify the session cookie and return its claims.
fn claims_from_parts(parts: &Parts, state: &AppState) -> Result<AdminClaims, AdminAuthRejection> {
    let jar = CookieJar::from_headers(&parts.headers);
    let token = jar
        .get(SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .ok_or(AdminAuthRejection::Unauthorized)?;

    state
        .sessions()
        .verify_token(&token)
        .ok_or(AdminAuthRejection::Unauthorized)
}

/// Reattach the account record behind verified claims.
async fn load_identity(
    state: &AppState,
    claims: &AdminClaims,
) -> Result<AdminIdentity, AdminAuthRejection> {
    let id = claims
        .id
        .parse::<Uuid>()
        .map(AdminUserId::new)
        .map_err(|_| AdminAuthRejection::Unauthorized)?;

    let account = AdminUserRepository::new(state.pool())
        .get_by_id(id)
        .await
        .map_err(|e| {
            sentry::capture_error(&e);
            tracing::error!(error = %e, "Account lookup failed during authentication");
            AdminAuthRejection::Internal
        })?
        .ok_or(AdminAuthRejection::Unauthorized)?;

    if !account.is_active {
        return Err(AdminAuthRejection::Unauthorized);
    }

    Ok(account.identity())
}

/// Extractor that requires admin authentication.
///
/// Verifies the session cookie and reattaches the account record. Handlers
/// make their own authorization decisions on the extracted identity via
/// [`AdminIdentity::has_permission`].
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdmin(admin): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.username)
/// }
/// ```
pub struct RequireAdmin(pub AdminIdentity);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = claims_from_parts(parts, state)?;
        let identity = load_identity(state, &claims).await?;
        Ok(Self(identity))
    }
}

/// Extractor that requires a super admin session.
///
/// A non-super token is rejected with 403 before the account store is
/// consulted; the flag is then re-checked on the fresh record, so a
/// demotion takes effect without waiting out the token lifetime.
pub struct RequireSuperAdmin(pub AdminIdentity);

impl FromRequestParts<AppState> for RequireSuperAdmin {
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = claims_from_parts(parts, state)?;
        if !claims.is_super_admin {
            return Err(AdminAuthRejection::Forbidden);
        }

        let identity = load_identity(state, &claims).await?;
        if !identity.is_super_admin {
            return Err(AdminAuthRejection::Forbidden);
        }

        Ok(Self(identity))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{Request, header};
    use secrecy::SecretString;
    use sqlx::postgres::PgPoolOptions;

    use crate::config::ServerConfig;

    use super::*;

    const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

    /// State backed by a lazy pool; no connection is made unless a query runs.
    fn test_state() -> AppState {
        let config = ServerConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "https://www.shuk-online.co.il".to_string(),
            session_secret: Some(SecretString::from(TEST_SECRET)),
            environment: "development".to_string(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        };
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/test")
            .unwrap();
        AppState::new(config, pool)
    }

    fn parts_with_cookie(token: Option<&str>) -> Parts {
        let builder = Request::builder().uri("/");
        let builder = match token {
            Some(token) => builder.header(
                header::COOKIE,
                format!("{SESSION_COOKIE_NAME}={token}"),
            ),
            None => builder,
        };
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn test_missing_cookie_is_unauthorized() {
        let state = test_state();
        let mut parts = parts_with_cookie(None);

        let result = RequireAdmin::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AdminAuthRejection::Unauthorized)));
    }

    #[tokio::test]
    async fn test_garbage_token_is_unauthorized() {
        let state = test_state();
        let mut parts = parts_with_cookie(Some("not-a-token"));

        let result = RequireAdmin::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AdminAuthRejection::Unauthorized)));
    }

    #[tokio::test]
    async fn test_regular_admin_token_is_forbidden_for_super_extractor() {
        let state = test_state();
        let token = state
            .sessions()
            .issue_token(AdminUserId::new(Uuid::new_v4()), "dana", false)
            .unwrap();
        let mut parts = parts_with_cookie(Some(&token));

        // Rejected on the claim alone; the account store is never reached.
        let result = RequireSuperAdmin::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AdminAuthRejection::Forbidden)));
    }

    #[tokio::test]
    async fn test_garbage_token_is_unauthorized_for_super_extractor() {
        let state = test_state();
        let mut parts = parts_with_cookie(Some("a.b.c"));

        let result = RequireSuperAdmin::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AdminAuthRejection::Unauthorized)));
    }

    #[test]
    fn test_rejection_status_codes() {
        assert_eq!(
            AdminAuthRejection::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AdminAuthRejection::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AdminAuthRejection::Internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
