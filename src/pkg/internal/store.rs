use tokio::sync::RwLock;

use super::adaptors::students::spec::Student;

/// Process-lifetime record list. Nothing is persisted; a restart starts empty.
#[derive(Debug, Default)]
pub struct StudentStore {
    pub(super) records: RwLock<Vec<Student>>,
}

impl StudentStore {
    pub fn new() -> Self {
        StudentStore::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
