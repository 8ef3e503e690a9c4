// handlers/public/auth/mod.rs - Account registration and login
//
// Both endpoints answer with the Portuguese messages the game's web client
// displays verbatim.

use std::net::SocketAddr;

use axum::http::HeaderMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub mod login; // POST /login - verify credentials
pub mod register; // POST /register - create account or change password

pub use login::login_post;
pub use register::register_post;

pub const MSG_REQUIRED_FIELDS: &str = "Login e senha são obrigatórios";
pub const MSG_ACCOUNT_CREATED: &str = "Conta criada com sucesso!";
pub const MSG_WRONG_CURRENT_PASSWORD: &str = "Senha atual incorreta!";
pub const MSG_PASSWORD_UPDATED: &str = "Senha atualizada com sucesso!";
pub const MSG_LOGIN_EXISTS: &str = "Login já existe!";
pub const MSG_ACCOUNT_NOT_FOUND: &str = "Conta não existe";
pub const MSG_WRONG_PASSWORD: &str = "Senha incorreta";

/// Credentials shared by both endpoints. Empty strings count as absent.
#[derive(Debug, Default, Deserialize)]
pub struct Credentials {
    #[serde(default, deserialize_with = "scalar_text")]
    pub login: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub password: Option<String>,
}

impl Credentials {
    /// Returns `(login, password)` when both are present and non-empty
    pub fn required(&self) -> Option<(&str, &str)> {
        let login = non_empty(&self.login)?;
        let password = non_empty(&self.password)?;
        Some((login, password))
    }
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Accept a JSON string or number as text; any other type counts as absent.
pub(crate) fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Address recorded as `lastIP`: the `X-Forwarded-For` value exactly as the
/// proxy sent it, otherwise the socket peer.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
}
