pub mod accounts;
pub mod leaderboard;
pub mod manager;
pub mod models;

pub use accounts::{AccountStore, MySqlAccountStore};
pub use leaderboard::{LeaderboardStore, MySqlLeaderboardStore};
pub use manager::{DatabaseManager, StoreError};
