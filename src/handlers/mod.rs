// handlers/mod.rs - Request handlers
pub mod public;

pub use public::*;

/// GET / - plain text liveness banner
pub async fn root() -> &'static str {
    "Backend do L2Crazy rodando!"
}
