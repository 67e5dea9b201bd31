use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
    pub school: String,
    pub gpa: f64,
    pub talent: String,
    pub reason: String,
    pub faculty: String,
    pub university: String,
    pub image: Option<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub awards: Vec<String>,
    #[serde(default)]
    pub works: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Key for name ordering, shared by the server sort and the listing page.
    pub fn sort_name(&self) -> String {
        self.full_name().to_lowercase()
    }
}
