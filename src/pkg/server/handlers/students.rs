use askama::Template;
use axum::{
    Json,
    extract::{Multipart, Path as AxumPath, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};

use super::uploads::read_blob;
use crate::{
    pkg::{
        internal::{
            adaptors::students::{
                mutators::StudentMutator, selectors::StudentSelector, spec::Student,
            },
            form::{FieldErrors, PortfolioInput},
            table::{SortKey, SortOrder, SortState, StudentTable},
            uploads::FileBlob,
        },
        server::{
            state::AppState,
            uispec::{PortfolioForm, StudentDetail, StudentList},
        },
    },
    prelude::{Error, Result},
};

/// Everything one form post carries, files still in memory.
#[derive(Debug, Default)]
pub struct Submission {
    pub input: PortfolioInput,
    pub image: Option<FileBlob>,
    pub activities: Vec<FileBlob>,
    pub awards: Vec<FileBlob>,
    pub works: Vec<FileBlob>,
}

impl Submission {
    /// Reads the whole post. On error, fields read so far stay populated.
    pub async fn read(&mut self, mut multipart: Multipart) -> Result<()> {
        while let Some(field) = multipart.next_field().await? {
            let field_name = field.name().unwrap_or_default().to_string();
            match field_name.as_str() {
                "image" => {
                    if let Some(blob) = read_blob(field).await? {
                        self.image = Some(blob);
                    }
                }
                "activities" | "awards" | "works" => {
                    if let Some(blob) = read_blob(field).await? {
                        match field_name.as_str() {
                            "activities" => self.activities.push(blob),
                            "awards" => self.awards.push(blob),
                            _ => self.works.push(blob),
                        }
                    }
                }
                _ => {
                    let value = field.text().await?;
                    if !self.input.set(&field_name, value) {
                        tracing::debug!("ignoring unknown form field {}", &field_name);
                    }
                }
            }
        }
        Ok(())
    }

    /// Uploads each file group in turn, then appends the record.
    async fn save(&self, state: &AppState, gpa: f64) -> Result<Student> {
        let mut data = self.input.clone().into_student_data(gpa);
        if let Some(image) = &self.image {
            data.image = Some(state.uploader.upload_one(image).await?);
        }
        if !self.activities.is_empty() {
            data.activities = state.uploader.upload(&self.activities).await?;
        }
        if !self.awards.is_empty() {
            data.awards = state.uploader.upload(&self.awards).await?;
        }
        if !self.works.is_empty() {
            data.works = state.uploader.upload(&self.works).await?;
        }
        Ok(StudentMutator::new(&state.store).create(data).await)
    }
}

fn render_form(
    state: &AppState,
    status: StatusCode,
    form: &PortfolioInput,
    errors: &FieldErrors,
    failure: Option<&str>,
) -> Result<Response> {
    let page = PortfolioForm {
        service_name: &state.service_name,
        form,
        errors,
        failure,
    };
    Ok((status, Html(page.render()?)).into_response())
}

pub async fn form(State(state): State<AppState>) -> Result<Response> {
    render_form(
        &state,
        StatusCode::OK,
        &PortfolioInput::default(),
        &FieldErrors::default(),
        None,
    )
}

fn upload_failed(state: &AppState, input: &PortfolioInput, e: Error) -> Result<Response> {
    let status = e.status();
    if status.is_server_error() {
        tracing::error!("portfolio submission failed: {}", &e);
    } else {
        tracing::warn!("portfolio submission rejected: {}", &e);
    }
    render_form(
        state,
        status,
        input,
        &FieldErrors::default(),
        Some(&format!("Upload failed: {}", e)),
    )
}

pub async fn submit(State(state): State<AppState>, multipart: Multipart) -> Result<Response> {
    let mut submission = Submission::default();
    if let Err(e) = submission.read(multipart).await {
        return upload_failed(&state, &submission.input, e);
    }
    let gpa = match submission.input.check() {
        Ok(gpa) => gpa,
        Err(errors) => {
            tracing::debug!("submission blocked on {} fields", errors.len());
            return render_form(
                &state,
                StatusCode::UNPROCESSABLE_ENTITY,
                &submission.input,
                &errors,
                None,
            );
        }
    };
    match submission.save(&state, gpa).await {
        Ok(student) => {
            tracing::info!("portfolio saved for student {}", &student.id);
            Ok(Redirect::to("/students").into_response())
        }
        Err(e) => upload_failed(&state, &submission.input, e),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub sort: Option<SortKey>,
    pub order: Option<SortOrder>,
}

pub async fn list(
    State(state): State<AppState>,
    query: core::result::Result<Query<ListQuery>, QueryRejection>,
) -> Result<Html<String>> {
    let query = match query {
        Ok(Query(q)) => q,
        Err(e) => {
            tracing::debug!("falling back to default sort: {}", e);
            ListQuery::default()
        }
    };
    let mut table = StudentTable::load(&state.store).await;
    table.apply(SortState::new(
        query.sort.unwrap_or_default(),
        query.order.unwrap_or_default(),
    ));
    let page = StudentList {
        service_name: &state.service_name,
        table: &table,
    };
    Ok(Html(page.render()?))
}

pub async fn detail(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Response> {
    let student = StudentSelector::new(&state.store).get_by_raw_id(&id).await;
    let status = match student {
        Some(_) => StatusCode::OK,
        None => StatusCode::NOT_FOUND,
    };
    let page = StudentDetail {
        service_name: &state.service_name,
        student: student.as_ref(),
    };
    Ok((status, Html(page.render()?)).into_response())
}

pub async fn list_json(State(state): State<AppState>) -> Json<Vec<Student>> {
    Json(StudentSelector::new(&state.store).get_all().await)
}

pub async fn retrieve_json(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<Student>> {
    let student = StudentSelector::new(&state.store).get_by_raw_id(&id).await;
    student.map(Json).ok_or(Error::StudentNotFound(id))
}

pub async fn clear(State(state): State<AppState>) -> Json<Value> {
    let cleared = StudentMutator::new(&state.store).clear().await;
    Json(json!({ "cleared": cleared }))
}
