// handlers/public/ranks.rs - GET /ranks handler

use axum::extract::State;
use serde::Serialize;

use crate::app::AppState;
use crate::database::models::RankEntry;
use crate::middleware::{ApiResponse, ApiResult};

/// Entries returned per category
pub const RANKS_LIMIT: u32 = 10;

#[derive(Debug, Serialize)]
pub struct Ranks {
    #[serde(rename = "PVP")]
    pub pvp: Vec<String>,
    #[serde(rename = "PK")]
    pub pk: Vec<String>,
    #[serde(rename = "Clan")]
    pub clan: Vec<String>,
}

/// GET /ranks - top characters by PvP and PK kills, top clans by level
///
/// The three queries run concurrently; if any fails the whole response is a
/// 500 and the other results are dropped.
pub async fn ranks_get(State(state): State<AppState>) -> ApiResult<Ranks> {
    let board = &state.leaderboard;
    let (pvp, pk, clan) = tokio::try_join!(
        board.top_by_pvp_kills(RANKS_LIMIT),
        board.top_by_pk_kills(RANKS_LIMIT),
        board.top_clans_by_level(RANKS_LIMIT),
    )?;

    Ok(ApiResponse::success(Ranks {
        pvp: display_lines(pvp),
        pk: display_lines(pk),
        clan: display_lines(clan),
    }))
}

fn display_lines(entries: Vec<RankEntry>) -> Vec<String> {
    entries.iter().map(RankEntry::to_string).collect()
}
