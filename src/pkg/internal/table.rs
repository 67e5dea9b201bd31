use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{
    adaptors::students::{selectors::StudentSelector, spec::Student},
    store::StudentStore,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Gpa,
    Name,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Gpa => "gpa",
            SortKey::Name => "name",
        }
    }
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn flip(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortState {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        SortState { key, order }
    }

    /// Same key flips the order, a different key starts ascending.
    pub fn select(self, key: SortKey) -> Self {
        if self.key == key {
            SortState::new(key, self.order.flip())
        } else {
            SortState::new(key, SortOrder::Asc)
        }
    }

    pub fn compare(&self, a: &Student, b: &Student) -> Ordering {
        let ord = match self.key {
            SortKey::Gpa => a.gpa.total_cmp(&b.gpa),
            SortKey::Name => a.sort_name().cmp(&b.sort_name()),
        };
        match self.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }

    /// Query string reproducing this state, e.g. `sort=gpa&order=desc`.
    pub fn query(&self) -> String {
        format!("sort={}&order={}", self.key.as_str(), self.order.as_str())
    }

    /// Column indicator: an arrow on the active key only.
    pub fn arrow(&self, key: SortKey) -> &'static str {
        match (self.key == key, self.order) {
            (false, _) => "",
            (true, SortOrder::Asc) => "↑",
            (true, SortOrder::Desc) => "↓",
        }
    }
}

/// Records read once, re-sorted locally on every state change.
#[derive(Debug, Clone, Default)]
pub struct StudentTable {
    rows: Vec<Student>,
    state: SortState,
}

impl StudentTable {
    pub fn new(rows: Vec<Student>) -> Self {
        let mut table = StudentTable {
            rows,
            state: SortState::default(),
        };
        table.resort();
        table
    }

    pub async fn load(store: &StudentStore) -> Self {
        let rows = StudentSelector::new(store).get_all().await;
        tracing::debug!("loaded {} students into table", rows.len());
        StudentTable::new(rows)
    }

    pub fn state(&self) -> SortState {
        self.state
    }

    pub fn rows(&self) -> &[Student] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn apply(&mut self, state: SortState) {
        self.state = state;
        self.resort();
    }

    fn resort(&mut self) {
        let state = self.state;
        self.rows.sort_by(|a, b| state.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::pkg::internal::adaptors::students::mutators::{CreateStudentData, StudentMutator};

    async fn seeded() -> StudentStore {
        let store = StudentStore::new();
        let mut mutator = StudentMutator::new(&store);
        for (first, last, gpa) in [
            ("somchai", "Jaidee", 3.1),
            ("Anan", "Srisuk", 3.9),
            ("Malee", "Boonma", 2.4),
            ("anan", "Aroon", 3.9),
        ] {
            mutator
                .create(CreateStudentData {
                    first_name: first.into(),
                    last_name: last.into(),
                    gpa,
                    ..Default::default()
                })
                .await;
        }
        store
    }

    fn select(table: &mut StudentTable, key: SortKey) {
        table.apply(table.state().select(key));
    }

    fn names(table: &StudentTable) -> Vec<String> {
        table.rows().iter().map(Student::full_name).collect()
    }

    #[test]
    fn test_select_toggles_and_resets() {
        let state = SortState::default();
        assert_eq!(state, SortState::new(SortKey::Gpa, SortOrder::Asc));
        let state = state.select(SortKey::Gpa);
        assert_eq!(state.order, SortOrder::Desc);
        let state = state.select(SortKey::Gpa);
        assert_eq!(state.order, SortOrder::Asc);
        let state = state.select(SortKey::Gpa).select(SortKey::Name);
        assert_eq!(state, SortState::new(SortKey::Name, SortOrder::Asc));
        let state = state.select(SortKey::Name).select(SortKey::Gpa);
        assert_eq!(state, SortState::new(SortKey::Gpa, SortOrder::Asc));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_gpa_sort_both_directions() {
        let mut table = StudentTable::load(&seeded().await).await;
        let gpas: Vec<f64> = table.rows().iter().map(|s| s.gpa).collect();
        assert_eq!(gpas, vec![2.4, 3.1, 3.9, 3.9]);
        select(&mut table, SortKey::Gpa);
        let gpas: Vec<f64> = table.rows().iter().map(|s| s.gpa).collect();
        assert_eq!(gpas, vec![3.9, 3.9, 3.1, 2.4]);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_name_sort_is_case_insensitive() {
        let mut table = StudentTable::load(&seeded().await).await;
        select(&mut table, SortKey::Name);
        assert_eq!(
            names(&table),
            vec!["anan Aroon", "Anan Srisuk", "Malee Boonma", "somchai Jaidee"]
        );
        select(&mut table, SortKey::Name);
        assert_eq!(
            names(&table),
            vec!["somchai Jaidee", "Malee Boonma", "Anan Srisuk", "anan Aroon"]
        );
    }

    #[tokio::test]
    #[traced_test]
    async fn test_selecting_twice_reverses_rows() {
        let mut table = StudentTable::load(&seeded().await).await;
        select(&mut table, SortKey::Name);
        let ascending = names(&table);
        select(&mut table, SortKey::Name);
        let mut descending = names(&table);
        descending.reverse();
        assert_eq!(ascending, descending);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_resort_does_not_reread_store() {
        let store = seeded().await;
        let mut table = StudentTable::load(&store).await;
        StudentMutator::new(&store)
            .create(CreateStudentData {
                first_name: "Late".into(),
                gpa: 1.0,
                ..Default::default()
            })
            .await;
        select(&mut table, SortKey::Name);
        select(&mut table, SortKey::Gpa);
        assert_eq!(table.rows().len(), 4);
        assert_eq!(store.len().await, 5);
    }

    #[test]
    fn test_query_and_arrows() {
        let state = SortState::new(SortKey::Name, SortOrder::Desc);
        assert_eq!(state.query(), "sort=name&order=desc");
        assert_eq!(state.arrow(SortKey::Name), "↓");
        assert_eq!(state.arrow(SortKey::Gpa), "");
    }

    #[test]
    fn test_empty_table() {
        let mut table = StudentTable::new(vec![]);
        select(&mut table, SortKey::Name);
        assert!(table.is_empty());
    }
}
