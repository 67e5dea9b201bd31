use askama::Template;
use axum::{Json, extract::State, response::Html};

use crate::{
    pkg::{
        internal::firestore::PortfolioItem,
        server::{state::AppState, uispec::PortfolioGallery},
    },
    prelude::Result,
};

async fn items(state: &AppState) -> Vec<PortfolioItem> {
    match &state.firestore {
        Some(client) => client.fetch_portfolio().await,
        None => {
            tracing::warn!("document database not configured, empty portfolio");
            vec![]
        }
    }
}

pub async fn gallery(State(state): State<AppState>) -> Result<Html<String>> {
    let items = items(&state).await;
    let page = PortfolioGallery {
        service_name: &state.service_name,
        items: &items,
    };
    Ok(Html(page.render()?))
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<PortfolioItem>> {
    Json(items(&state).await)
}
