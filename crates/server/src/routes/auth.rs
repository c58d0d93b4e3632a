//! Admin session route handlers.
//!
//! Login verifies credentials against the account store and issues the
//! signed session cookie; logout unconditionally clears it. Every
//! credential failure collapses to the same generic 401 so callers cannot
//! tell which check failed.

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use shuk_core::AdminIdentity;

use crate::db::AdminUserRepository;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Generic credential-failure message. Deliberately does not distinguish
/// unknown username, wrong password, or deactivated account.
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Placeholder hash verified when the username is unknown, so that branch
/// costs the same argon2 work as a wrong password and response timing does
/// not reveal whether the account exists.
const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$VE0e3g7DalWHgDwou3nuRA$uC6TER156UQpk0lNQ5+jHM0l5poVjPA1he8TZJvJcBU";

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Identity summary returned by login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id: String,
    pub username: String,
    pub is_super_admin: bool,
}

/// Handle login: verify credentials, issue the session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(form): Json<LoginForm>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    let Some(account) = AdminUserRepository::new(state.pool())
        .get_by_username(&form.username)
        .await?
    else {
        let _ = verify_password(DUMMY_PASSWORD_HASH, &form.password);
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    };

    if !verify_password(&account.password_hash, &form.password) {
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    if !account.is_active {
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    let token = state
        .sessions()
        .issue_token(account.id, &account.username, account.is_super_admin)?;

    tracing::info!(admin = %account.username, "Admin logged in");

    let response = LoginResponse {
        id: account.id.to_string(),
        username: account.username,
        is_super_admin: account.is_super_admin,
    };

    Ok((
        jar.add(state.sessions().login_cookie(token)),
        Json(response),
    ))
}

/// Handle logout: overwrite the session cookie with an expired one.
///
/// Always succeeds, with or without a valid session.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    (
        jar.add(state.sessions().logout_cookie()),
        StatusCode::NO_CONTENT,
    )
}

/// Return the authenticated admin's identity, including the permission set.
pub async fn me(RequireAdmin(identity): RequireAdmin) -> Json<AdminIdentity> {
    Json(identity)
}

/// Verify a password against a stored argon2 PHC-format hash.
///
/// An unparseable stored hash verifies as false rather than erroring; it is
/// indistinguishable from a wrong password.
fn verify_password(stored_hash: &str, password: &str) -> bool {
    PasswordHash::new(stored_hash).is_ok_and(|hash| {
        Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};

    use super::*;

    fn hash(password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_verify_password_accepts_correct_password() {
        let stored = hash("hunter2!correct");
        assert!(verify_password(&stored, "hunter2!correct"));
    }

    #[test]
    fn test_verify_password_rejects_wrong_password() {
        let stored = hash("hunter2!correct");
        assert!(!verify_password(&stored, "hunter2!wrong"));
    }

    #[test]
    fn test_verify_password_rejects_malformed_hash() {
        assert!(!verify_password("not-a-phc-hash", "whatever"));
        assert!(!verify_password("", "whatever"));
    }

    #[test]
    fn test_dummy_hash_is_a_parseable_phc_string() {
        // The unknown-username branch must exercise real argon2 work, which
        // only happens when the placeholder parses as a PHC hash.
        assert!(PasswordHash::new(DUMMY_PASSWORD_HASH).is_ok());
        assert!(!verify_password(DUMMY_PASSWORD_HASH, "whatever"));
    }
}
