use std::sync::Arc;

use crate::{
    conf::Settings,
    pkg::internal::{firestore::FirestoreClient, store::StudentStore, uploads::Uploader},
};

#[derive(Debug, Clone)]
pub struct AppState {
    pub service_name: Arc<str>,
    pub store: Arc<StudentStore>,
    pub uploader: Arc<Uploader>,
    pub firestore: Option<Arc<FirestoreClient>>,
    pub max_request_bytes: usize,
}

impl AppState {
    pub fn new(
        service_name: &str,
        store: StudentStore,
        uploader: Uploader,
        max_request_bytes: usize,
    ) -> AppState {
        AppState {
            service_name: Arc::from(service_name),
            store: Arc::new(store),
            uploader: Arc::new(uploader),
            firestore: None,
            max_request_bytes,
        }
    }

    pub fn from_settings(s: &Settings) -> AppState {
        let uploader = Uploader::new(&s.upload_dir, &s.upload_url_prefix, s.max_file_bytes);
        let firestore = FirestoreClient::from_settings(s);
        if firestore.is_none() {
            tracing::warn!("FIRESTORE_PROJECT_ID not set, portfolio gallery will be empty");
        }
        AppState {
            firestore: firestore.map(Arc::new),
            ..AppState::new(
                &s.service_name,
                StudentStore::new(),
                uploader,
                s.max_request_bytes,
            )
        }
    }
}
