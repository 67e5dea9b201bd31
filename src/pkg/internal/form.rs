use std::{borrow::Cow, collections::BTreeMap};

use validator::{Validate, ValidationError};

use super::adaptors::students::mutators::CreateStudentData;

const GPA_MIN: f64 = 0.0;
const GPA_MAX: f64 = 4.0;

/// Raw text fields of the application form, as submitted.
#[derive(Debug, Clone, Default, Validate)]
pub struct PortfolioInput {
    #[validate(custom(function = "validate_first_name"))]
    pub first_name: String,
    #[validate(custom(function = "validate_last_name"))]
    pub last_name: String,
    pub address: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    pub school: String,
    #[validate(custom(function = "validate_gpa"))]
    pub gpa: String,
    pub talent: String,
    pub reason: String,
    pub faculty: String,
    pub university: String,
}

/// Field name to message, one entry per failing field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl PortfolioInput {
    /// Assigns a text field by its form name. Returns false for unknown names.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "first_name" => &mut self.first_name,
            "last_name" => &mut self.last_name,
            "address" => &mut self.address,
            "phone" => &mut self.phone,
            "school" => &mut self.school,
            "gpa" => &mut self.gpa,
            "talent" => &mut self.talent,
            "reason" => &mut self.reason,
            "faculty" => &mut self.faculty,
            "university" => &mut self.university,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Validates every field and returns the parsed GPA when nothing failed.
    pub fn check(&self) -> Result<f64, FieldErrors> {
        if let Err(errs) = self.validate() {
            let mut out = BTreeMap::new();
            for (field, field_errs) in errs.field_errors() {
                let message = field_errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "invalid value".to_string());
                out.insert(field.to_string(), message);
            }
            return Err(FieldErrors(out));
        }
        parse_gpa(&self.gpa).ok_or_else(|| {
            FieldErrors(BTreeMap::from([("gpa".to_string(), GPA_MESSAGE.to_string())]))
        })
    }

    /// Builds the record payload; file references are filled in after upload.
    pub fn into_student_data(self, gpa: f64) -> CreateStudentData {
        CreateStudentData {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            address: self.address,
            phone: self.phone,
            school: self.school,
            gpa,
            talent: self.talent,
            reason: self.reason,
            faculty: self.faculty,
            university: self.university,
            ..Default::default()
        }
    }
}

const GPA_MESSAGE: &str = "GPA must be between 0 and 4.0";

fn parse_gpa(raw: &str) -> Option<f64> {
    let gpa = raw.trim().parse::<f64>().ok()?;
    (gpa.is_finite() && (GPA_MIN..=GPA_MAX).contains(&gpa)).then_some(gpa)
}

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_first_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("required", "First name is required"));
    }
    Ok(())
}

fn validate_last_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("required", "Last name is required"));
    }
    Ok(())
}

fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if value.len() != 10 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(failure("phone", "Phone number must be exactly 10 digits"));
    }
    Ok(())
}

fn validate_gpa(value: &str) -> Result<(), ValidationError> {
    match parse_gpa(value) {
        Some(_) => Ok(()),
        None => Err(failure("gpa", GPA_MESSAGE)),
    }
}
