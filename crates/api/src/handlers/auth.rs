//! Handlers for the authentication endpoints (login, validate-session,
//! logout, change-password).

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use fieldtrack_core::error::CoreError;
use fieldtrack_db::models::session::CreateSession;
use fieldtrack_db::models::user::UserContext;
use fieldtrack_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::{generate_session_token, SESSION_TTL_HOURS};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{session_token, AuthUser};
use crate::response::Ack;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub session_token: String,
    pub profile_name: String,
    pub email: String,
    pub role: String,
}

/// Request body for `POST /api/validate-session`.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub token: String,
}

/// Response for `POST /api/validate-session`. `user_data` is present only
/// when the token is valid.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserContext>,
}

/// Response for `POST /api/logout`.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Request body for `POST /api/change-password`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/login
///
/// Authenticate with username + password; on success issue an opaque
/// session token valid for 24 hours.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    // Unknown, inactive, and wrong-password all produce the same error.
    let invalid = || AppError::Core(CoreError::InvalidCredentials("Invalid credentials".into()));

    let user = UserRepo::find_active_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid)?;

    if !verify_password(&input.password, &user.password_hash) {
        return Err(invalid());
    }

    // Lazy sweep: there is no background reaper for expired sessions.
    let pruned = SessionRepo::prune_expired(&state.pool).await?;
    if pruned > 0 {
        tracing::debug!(pruned, "Pruned expired sessions");
    }

    let token = generate_session_token();
    let expires_at = Utc::now() + chrono::Duration::hours(SESSION_TTL_HOURS);
    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            session_token: token.clone(),
            expires_at,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        success: true,
        session_token: token,
        profile_name: user.profile_name,
        email: user.email,
        role: user.role,
    }))
}

/// POST /api/validate-session
///
/// Check a token without consuming it. Invalid tokens get a plain
/// `{"valid": false}` with HTTP 200, never an error.
pub async fn validate_session(
    State(state): State<AppState>,
    Json(input): Json<ValidateRequest>,
) -> Json<ValidateResponse> {
    let user_data = match SessionRepo::find_user_context(&state.pool, &input.token).await {
        Ok(user) => user,
        Err(err) => {
            tracing::error!(error = %err, "Session validation failed");
            None
        }
    };

    Json(ValidateResponse {
        valid: user_data.is_some(),
        user_data,
    })
}

/// POST /api/logout
///
/// Delete the caller's session. Idempotent: a second logout with the same
/// token still reports success (it just deletes nothing), so the token is
/// taken straight from the header without a validation round-trip.
pub async fn logout(
    State(state): State<AppState>,
    headers: axum::http::HeaderMap,
) -> AppResult<Json<LogoutResponse>> {
    let token = session_token(&headers)?;
    SessionRepo::delete_by_token(&state.pool, &token).await?;
    Ok(Json(LogoutResponse { success: true }))
}

/// POST /api/change-password
///
/// Re-verify the current password before overwriting the stored hash.
/// Other active sessions for the user remain valid.
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<Json<Ack>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::InvalidCredentials(
                "Current password is incorrect".into(),
            ))
        })?;

    if !verify_password(&input.current_password, &user.password_hash) {
        return Err(AppError::Core(CoreError::InvalidCredentials(
            "Current password is incorrect".into(),
        )));
    }

    UserRepo::update_password(&state.pool, user.id, &hash_password(&input.new_password)).await?;

    tracing::info!(user_id = user.id, "Password changed");

    Ok(Json(Ack::ok("Password changed successfully")))
}
