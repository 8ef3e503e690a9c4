use sqlx::FromRow;

/// Access level given to every self-registered account
pub const DEFAULT_ACCESS_LEVEL: i64 = 0;

/// Game server id recorded for new accounts
pub const DEFAULT_LAST_SERVER: i64 = 1;

/// Row of the `accounts` table shared with the login server.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Account {
    pub login: String,
    /// Digest produced by `auth::hash_password`
    pub password: String,
    pub email: String,
    /// Milliseconds since the Unix epoch
    #[sqlx(rename = "lastactive")]
    pub last_active: i64,
    pub access_level: i64,
    #[sqlx(rename = "lastIP")]
    pub last_ip: Option<String>,
    #[sqlx(rename = "lastServer")]
    pub last_server: i64,
}

impl Account {
    /// Build a freshly registered account stamped with the current time.
    pub fn new(
        login: impl Into<String>,
        digest: impl Into<String>,
        email: Option<String>,
        last_ip: Option<String>,
    ) -> Self {
        Self {
            login: login.into(),
            password: digest.into(),
            email: email.unwrap_or_default(),
            last_active: chrono::Utc::now().timestamp_millis(),
            access_level: DEFAULT_ACCESS_LEVEL,
            last_ip,
            last_server: DEFAULT_LAST_SERVER,
        }
    }
}
