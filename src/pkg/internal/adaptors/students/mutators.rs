use chrono::Utc;
use uuid::Uuid;

use crate::pkg::internal::{adaptors::students::spec::Student, store::StudentStore};

#[derive(Debug, Clone, Default)]
pub struct CreateStudentData {
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
    pub activities: Vec<String>,
    pub awards: Vec<String>,
    pub works: Vec<String>,
}

pub struct StudentMutator<'a> {
    store: &'a StudentStore,
}

impl<'a> StudentMutator<'a> {
    pub fn new(store: &'a StudentStore) -> Self {
        StudentMutator { store }
    }

    pub async fn create(&mut self, data: CreateStudentData) -> Student {
        let student = Student {
            id: Uuid::new_v4(),
            first_name: data.first_name,
            last_name: data.last_name,
            address: data.address,
            phone: data.phone,
            school: data.school,
            gpa: data.gpa,
            talent: data.talent,
            reason: data.reason,
            faculty: data.faculty,
            university: data.university,
            image: data.image,
            activities: data.activities,
            awards: data.awards,
            works: data.works,
            submitted_at: Utc::now(),
        };
        self.store.records.write().await.push(student.clone());
        tracing::debug!("stored student {}", &student.id);
        student
    }

    pub async fn clear(&mut self) -> usize {
        let mut records = self.store.records.write().await;
        let dropped = records.len();
        records.clear();
        tracing::info!("cleared {} students", dropped);
        dropped
    }
}
