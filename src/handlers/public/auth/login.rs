// handlers/public/auth/login.rs - POST /login handler

use axum::{extract::State, Json};

use super::{Credentials, MSG_ACCOUNT_NOT_FOUND, MSG_REQUIRED_FIELDS, MSG_WRONG_PASSWORD};
use crate::app::AppState;
use crate::auth::verify_password;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

/// POST /login - verify credentials against the stored digest
///
/// Answers `{"success": true}` on a match. No session or token is issued;
/// the game client only needs the yes/no.
pub async fn login_post(
    State(state): State<AppState>,
    payload: Option<Json<Credentials>>,
) -> ApiResult<()> {
    let credentials = payload.map(|Json(body)| body).unwrap_or_default();
    let (login, password) = credentials
        .required()
        .ok_or_else(|| ApiError::bad_request(MSG_REQUIRED_FIELDS))?;

    let account = state
        .accounts
        .find_by_login(login)
        .await?
        .ok_or_else(|| ApiError::bad_request(MSG_ACCOUNT_NOT_FOUND))?;

    if !verify_password(password, &account.password) {
        tracing::warn!(login, "login rejected: wrong password");
        return Err(ApiError::bad_request(MSG_WRONG_PASSWORD));
    }

    tracing::debug!(login, "login verified");
    Ok(ApiResponse::ok())
}
