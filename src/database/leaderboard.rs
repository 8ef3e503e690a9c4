use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::database::manager::StoreError;
use crate::database::models::RankEntry;

/// Read-only ranking queries over the game server's `characters` and
/// `clan_data` tables. Results are sorted by value descending, then by name
/// ascending, and are empty when the table has no rows.
#[async_trait]
pub trait LeaderboardStore: Send + Sync {
    async fn top_by_pvp_kills(&self, limit: u32) -> Result<Vec<RankEntry>, StoreError>;
    async fn top_by_pk_kills(&self, limit: u32) -> Result<Vec<RankEntry>, StoreError>;
    async fn top_clans_by_level(&self, limit: u32) -> Result<Vec<RankEntry>, StoreError>;
}

pub struct MySqlLeaderboardStore {
    pool: MySqlPool,
}

impl MySqlLeaderboardStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, sql: &'static str, limit: u32) -> Result<Vec<RankEntry>, StoreError> {
        let rows = sqlx::query_as::<_, RankEntry>(sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl LeaderboardStore for MySqlLeaderboardStore {
    async fn top_by_pvp_kills(&self, limit: u32) -> Result<Vec<RankEntry>, StoreError> {
        self.fetch(
            "SELECT char_name AS name, CAST(pvpkills AS SIGNED) AS value \
             FROM characters ORDER BY pvpkills DESC, char_name ASC LIMIT ?",
            limit,
        )
        .await
    }

    async fn top_by_pk_kills(&self, limit: u32) -> Result<Vec<RankEntry>, StoreError> {
        self.fetch(
            "SELECT char_name AS name, CAST(pkkills AS SIGNED) AS value \
             FROM characters ORDER BY pkkills DESC, char_name ASC LIMIT ?",
            limit,
        )
        .await
    }

    async fn top_clans_by_level(&self, limit: u32) -> Result<Vec<RankEntry>, StoreError> {
        self.fetch(
            "SELECT c.clan_name AS name, CAST(c.clan_level AS SIGNED) AS value \
             FROM clan_data c ORDER BY c.clan_level DESC, c.clan_name ASC LIMIT ?",
            limit,
        )
        .await
    }
}
