use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{conf::Settings, prelude::Result};

/// Gallery entry read from the hosted document database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocuments {
    #[serde(default)]
    documents: Vec<Document>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Document {
    name: String,
    #[serde(default)]
    fields: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Value {
    string_value: Option<String>,
}

impl Document {
    fn text(&self, field: &str) -> String {
        self.fields
            .get(field)
            .and_then(|v| v.string_value.clone())
            .unwrap_or_default()
    }

    fn into_item(self) -> PortfolioItem {
        PortfolioItem {
            id: self.name.rsplit('/').next().unwrap_or_default().to_string(),
            title: self.text("title"),
            description: self.text("description"),
            image_url: self.text("imageUrl"),
        }
    }
}

/// Read-only client for one Firestore collection over the REST API.
#[derive(Debug, Clone)]
pub struct FirestoreClient {
    http: reqwest::Client,
    base_url: String,
    project_id: String,
    collection: String,
    api_key: Option<String>,
}

impl FirestoreClient {
    pub fn new(base_url: &str, project_id: &str, collection: &str, api_key: Option<String>) -> Self {
        FirestoreClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            collection: collection.to_string(),
            api_key,
        }
    }

    /// None when no project is configured.
    pub fn from_settings(s: &Settings) -> Option<Self> {
        let project_id = s.firestore_project_id.as_deref()?;
        Some(FirestoreClient::new(
            &s.firestore_base_url,
            project_id,
            &s.firestore_collection,
            s.firestore_api_key.clone(),
        ))
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            &self.base_url, &self.project_id, &self.collection
        )
    }

    async fn list_page(&self, page_token: Option<&str>) -> Result<ListDocuments> {
        let mut query: Vec<(&str, &str)> = vec![];
        if let Some(key) = self.api_key.as_deref() {
            query.push(("key", key));
        }
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }
        let page = self
            .http
            .get(self.collection_url())
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json::<ListDocuments>()
            .await?;
        Ok(page)
    }

    pub async fn try_fetch_portfolio(&self) -> Result<Vec<PortfolioItem>> {
        let mut items = vec![];
        let mut page_token: Option<String> = None;
        loop {
            let page = self.list_page(page_token.as_deref()).await?;
            items.extend(page.documents.into_iter().map(Document::into_item));
            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }
        tracing::debug!("fetched {} portfolio items", items.len());
        Ok(items)
    }

    /// Failures are logged and read as an empty collection.
    pub async fn fetch_portfolio(&self) -> Vec<PortfolioItem> {
        match self.try_fetch_portfolio().await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!("error fetching portfolio: {}", &e);
                vec![]
            }
        }
    }
}
