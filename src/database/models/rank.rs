use std::fmt;

use sqlx::FromRow;

/// One leaderboard line: a character or clan name and the ranked value.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct RankEntry {
    pub name: String,
    pub value: i64,
}

impl RankEntry {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl fmt::Display for RankEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.value)
    }
}
