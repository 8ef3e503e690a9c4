// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Every endpoint of this API is anonymous: the game's web client posts
// credentials directly and reads the leaderboard without a session.

pub mod auth;
pub mod ranks;

pub use auth::{login_post, register_post};
pub use ranks::ranks_get;
