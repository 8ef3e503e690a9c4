//! In-memory stores and request helpers for handler tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tokio::sync::RwLock;
use tower::ServiceExt;

use crate::app::{app, AppState};
use crate::database::models::{Account, RankEntry};
use crate::database::{AccountStore, LeaderboardStore, StoreError};

#[derive(Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl MemoryAccountStore {
    pub async fn get(&self, login: &str) -> Option<Account> {
        self.accounts.read().await.get(login).cloned()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.get(login).await)
    }

    async fn create(&self, account: &Account) -> Result<(), StoreError> {
        self.accounts
            .write()
            .await
            .insert(account.login.clone(), account.clone());
        Ok(())
    }

    async fn update_password(&self, login: &str, digest: &str) -> Result<(), StoreError> {
        if let Some(account) = self.accounts.write().await.get_mut(login) {
            account.password = digest.to_string();
        }
        Ok(())
    }
}

/// Characters as `(name, pvpkills, pkkills)` and clans as `(name, level)`
#[derive(Default)]
pub struct MemoryLeaderboard {
    pub characters: Vec<(String, i64, i64)>,
    pub clans: Vec<(String, i64)>,
}

impl MemoryLeaderboard {
    fn top(rows: impl Iterator<Item = RankEntry>, limit: u32) -> Vec<RankEntry> {
        let mut rows: Vec<RankEntry> = rows.collect();
        rows.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
        rows.truncate(limit as usize);
        rows
    }
}

#[async_trait]
impl LeaderboardStore for MemoryLeaderboard {
    async fn top_by_pvp_kills(&self, limit: u32) -> Result<Vec<RankEntry>, StoreError> {
        let rows = self.characters.iter().map(|(n, pvp, _)| RankEntry::new(n, *pvp));
        Ok(Self::top(rows, limit))
    }

    async fn top_by_pk_kills(&self, limit: u32) -> Result<Vec<RankEntry>, StoreError> {
        let rows = self.characters.iter().map(|(n, _, pk)| RankEntry::new(n, *pk));
        Ok(Self::top(rows, limit))
    }

    async fn top_clans_by_level(&self, limit: u32) -> Result<Vec<RankEntry>, StoreError> {
        let rows = self.clans.iter().map(|(n, level)| RankEntry::new(n, *level));
        Ok(Self::top(rows, limit))
    }
}

/// Every call fails as if the pool could not hand out a connection
pub struct UnavailableStore;

fn unavailable() -> StoreError {
    StoreError::from(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl AccountStore for UnavailableStore {
    async fn find_by_login(&self, _login: &str) -> Result<Option<Account>, StoreError> {
        Err(unavailable())
    }

    async fn create(&self, _account: &Account) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn update_password(&self, _login: &str, _digest: &str) -> Result<(), StoreError> {
        Err(unavailable())
    }
}

#[async_trait]
impl LeaderboardStore for UnavailableStore {
    async fn top_by_pvp_kills(&self, _limit: u32) -> Result<Vec<RankEntry>, StoreError> {
        Err(unavailable())
    }

    async fn top_by_pk_kills(&self, _limit: u32) -> Result<Vec<RankEntry>, StoreError> {
        Err(unavailable())
    }

    async fn top_clans_by_level(&self, _limit: u32) -> Result<Vec<RankEntry>, StoreError> {
        Err(unavailable())
    }
}

/// Router wired to in-memory stores, with handles kept for assertions
pub struct TestApp {
    pub router: Router,
    pub accounts: Arc<MemoryAccountStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_leaderboard(MemoryLeaderboard::default())
    }

    pub fn with_leaderboard(leaderboard: MemoryLeaderboard) -> Self {
        let accounts = Arc::new(MemoryAccountStore::default());
        let state = AppState::new(accounts.clone(), Arc::new(leaderboard));
        Self {
            router: app(state),
            accounts,
        }
    }

    /// Router whose stores always fail
    pub fn unavailable() -> Router {
        app(AppState::new(
            Arc::new(UnavailableStore),
            Arc::new(UnavailableStore),
        ))
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        send(&self.router, post_json(path, &body)).await
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        send(&self.router, get_request(path)).await
    }
}

pub fn post_json(path: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

/// Drive one request through the router and decode the JSON body
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
