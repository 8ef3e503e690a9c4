pub mod account;
pub mod rank;

pub use account::Account;
pub use rank::RankEntry;
