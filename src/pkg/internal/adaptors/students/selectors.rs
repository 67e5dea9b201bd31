use uuid::Uuid;

use crate::pkg::internal::{adaptors::students::spec::Student, store::StudentStore};

pub struct StudentSelector<'a> {
    store: &'a StudentStore,
}

impl<'a> StudentSelector<'a> {
    pub fn new(store: &'a StudentStore) -> Self {
        StudentSelector { store }
    }

    /// Snapshot of every record, in insertion order.
    pub async fn get_all(&mut self) -> Vec<Student> {
        self.store.records.read().await.clone()
    }

    pub async fn get_by_id(&mut self, id: Uuid) -> Option<Student> {
        self.store
            .records
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    /// Lookup from a raw path segment; malformed ids are simply absent.
    pub async fn get_by_raw_id(&mut self, raw: &str) -> Option<Student> {
        match raw.parse::<Uuid>() {
            Ok(id) => self.get_by_id(id).await,
            Err(_) => {
                tracing::debug!("malformed student id: {}", raw);
                None
            }
        }
    }
}
