use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::database::manager::StoreError;
use crate::database::models::Account;

/// Data access for the `accounts` table.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Exact-match lookup by login.
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, StoreError>;

    /// Insert a new row. A duplicate login fails with the database's
    /// constraint error; there is no application-level guard.
    async fn create(&self, account: &Account) -> Result<(), StoreError>;

    /// Overwrite the stored digest. Callers verify the current password first.
    async fn update_password(&self, login: &str, digest: &str) -> Result<(), StoreError>;
}

pub struct MySqlAccountStore {
    pool: MySqlPool,
}

impl MySqlAccountStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for MySqlAccountStore {
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, StoreError> {
        // Integer columns vary in width between login server schemas; widen them
        let account = sqlx::query_as::<_, Account>(
            "SELECT login, password, COALESCE(email, '') AS email, \
                    CAST(lastactive AS SIGNED) AS lastactive, \
                    CAST(access_level AS SIGNED) AS access_level, \
                    lastIP, \
                    CAST(lastServer AS SIGNED) AS lastServer \
             FROM accounts WHERE login = ?",
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn create(&self, account: &Account) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO accounts \
             (login, password, email, lastactive, access_level, lastIP, lastServer) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&account.login)
        .bind(&account.password)
        .bind(&account.email)
        .bind(account.last_active)
        .bind(account.access_level)
        .bind(&account.last_ip)
        .bind(account.last_server)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_password(&self, login: &str, digest: &str) -> Result<(), StoreError> {
        sqlx::query("UPDATE accounts SET password = ? WHERE login = ?")
            .bind(digest)
            .bind(login)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
