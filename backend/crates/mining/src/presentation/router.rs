//! Mining Router

use crate::application::config::MiningConfig;
use crate::application::deadline_miner::DeadlineMiner;
use crate::domain::miner::RecordMiner;
use crate::presentation::handlers::{self, MiningAppState};
use axum::{Router, routing::post};
use std::sync::Arc;

/// Create the mining router backed by the deadline-bounded miner
pub fn mining_router(config: MiningConfig) -> Router {
    mining_router_generic(DeadlineMiner::new(Arc::new(config)))
}

/// Create a mining router for any miner implementation
pub fn mining_router_generic<M>(miner: M) -> Router
where
    M: RecordMiner + Clone + Send + Sync + 'static,
{
    let state = MiningAppState {
        miner: Arc::new(miner),
    };

    Router::new()
        .route("/mine", post(handlers::mine_record::<M>))
        .with_state(state)
}
