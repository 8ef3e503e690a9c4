// handlers/public/auth/register.rs - POST /register handler

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;

use super::{
    client_ip, non_empty, scalar_text, Credentials, MSG_ACCOUNT_CREATED, MSG_LOGIN_EXISTS,
    MSG_PASSWORD_UPDATED, MSG_REQUIRED_FIELDS, MSG_WRONG_CURRENT_PASSWORD,
};
use crate::app::AppState;
use crate::auth::{hash_password, verify_password};
use crate::database::models::Account;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, Message};

#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(rename = "newPassword", default, deserialize_with = "scalar_text")]
    pub new_password: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub email: Option<String>,
}

/// POST /register - create an account, or change its password
///
/// Input:
/// ```json
/// { "login": "string", "password": "string", "newPassword": "string?", "email": "string?" }
/// ```
///
/// An unknown login is created. A known login with `newPassword` has its
/// password replaced once `password` matches the stored digest. A known login
/// without `newPassword` is rejected as a duplicate.
pub async fn register_post(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    payload: Option<Json<RegisterRequest>>,
) -> ApiResult<Message> {
    let request = payload.map(|Json(body)| body).unwrap_or_default();
    let (login, password) = request
        .credentials
        .required()
        .ok_or_else(|| ApiError::bad_request(MSG_REQUIRED_FIELDS))?;

    let existing = state.accounts.find_by_login(login).await?;

    match (existing, non_empty(&request.new_password)) {
        (None, _) => {
            let peer = connect_info.map(|ConnectInfo(addr)| addr);
            let account = Account::new(
                login,
                hash_password(password),
                request.email.clone(),
                client_ip(&headers, peer),
            );
            state.accounts.create(&account).await?;

            tracing::info!(login, last_ip = ?account.last_ip, "account created");
            Ok(ApiResponse::message(MSG_ACCOUNT_CREATED))
        }
        (Some(account), Some(new_password)) => {
            if !verify_password(password, &account.password) {
                tracing::warn!(login, "password change rejected: current password mismatch");
                return Err(ApiError::bad_request(MSG_WRONG_CURRENT_PASSWORD));
            }
            state
                .accounts
                .update_password(login, &hash_password(new_password))
                .await?;

            tracing::info!(login, "password updated");
            Ok(ApiResponse::message(MSG_PASSWORD_UPDATED))
        }
        (Some(_), None) => Err(ApiError::bad_request(MSG_LOGIN_EXISTS)),
    }
}
