use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::MySqlPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::database::{AccountStore, LeaderboardStore, MySqlAccountStore, MySqlLeaderboardStore};
use crate::handlers;

/// Stores shared by every request. Cloning is cheap; the pool behind the
/// MySQL stores is the only process-wide resource.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountStore>,
    pub leaderboard: Arc<dyn LeaderboardStore>,
}

impl AppState {
    pub fn new(accounts: Arc<dyn AccountStore>, leaderboard: Arc<dyn LeaderboardStore>) -> Self {
        Self {
            accounts,
            leaderboard,
        }
    }

    pub fn mysql(pool: MySqlPool) -> Self {
        Self::new(
            Arc::new(MySqlAccountStore::new(pool.clone())),
            Arc::new(MySqlLeaderboardStore::new(pool)),
        )
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/register", post(handlers::register_post))
        .route("/login", post(handlers::login_post))
        .route("/ranks", get(handlers::ranks_get))
        .with_state(state)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
