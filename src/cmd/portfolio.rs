use crate::{conf::settings, pkg::internal::firestore::FirestoreClient, prelude::Result};

pub async fn dump() -> Result<()> {
    let items = match FirestoreClient::from_settings(&settings) {
        Some(client) => client.fetch_portfolio().await,
        None => {
            tracing::warn!("FIRESTORE_PROJECT_ID not set, nothing to fetch");
            vec![]
        }
    };
    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}
