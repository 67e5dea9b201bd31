use askama::Template;

use crate::pkg::internal::{
    adaptors::students::spec::Student,
    firestore::PortfolioItem,
    form::{FieldErrors, PortfolioInput},
    table::{SortKey, StudentTable},
};

#[derive(Template)]
#[template(path = "form.html")]
pub struct PortfolioForm<'a> {
    pub service_name: &'a str,
    pub form: &'a PortfolioInput,
    pub errors: &'a FieldErrors,
    pub failure: Option<&'a str>,
}

impl PortfolioForm<'_> {
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }
}

#[derive(Template)]
#[template(path = "students.html")]
pub struct StudentList<'a> {
    pub service_name: &'a str,
    pub table: &'a StudentTable,
}

impl StudentList<'_> {
    pub fn sort_link(&self, key: &str) -> String {
        let key = match key {
            "name" => SortKey::Name,
            _ => SortKey::Gpa,
        };
        format!("/students?{}", self.table.state().select(key).query())
    }

    pub fn arrow(&self, key: &str) -> &'static str {
        match key {
            "name" => self.table.state().arrow(SortKey::Name),
            _ => self.table.state().arrow(SortKey::Gpa),
        }
    }
}

#[derive(Template)]
#[template(path = "student_detail.html")]
pub struct StudentDetail<'a> {
    pub service_name: &'a str,
    pub student: Option<&'a Student>,
}

#[derive(Template)]
#[template(path = "portfolio.html")]
pub struct PortfolioGallery<'a> {
    pub service_name: &'a str,
    pub items: &'a [PortfolioItem],
}
