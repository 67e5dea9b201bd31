use axum::extract::State;
use tokio::fs;

use crate::{pkg::server::state::AppState, prelude::Result};

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

pub async fn healthz(State(state): State<AppState>) -> Result<()> {
    fs::create_dir_all(state.uploader.dir()).await?;
    tracing::debug!("service is healthy, {} students held", state.store.len().await);
    Ok(())
}
