use axum::{
    Json,
    extract::{
        Multipart, Path as AxumPath, State,
        multipart::Field,
    },
    http::{
        HeaderMap, HeaderValue,
        header::{
            CONTENT_DISPOSITION, CONTENT_SECURITY_POLICY, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS,
        },
    },
    response::IntoResponse,
};
use tokio::fs;

use crate::{
    pkg::{
        internal::uploads::{FileBlob, content_type_for},
        server::state::AppState,
    },
    prelude::{Error, Result},
};

/// Reads one file part. Browsers send an empty file name when nothing was
/// chosen; those parts yield None.
pub(super) async fn read_blob(field: Field<'_>) -> Result<Option<FileBlob>> {
    let file_name = field.file_name().unwrap_or_default().to_string();
    let data = field.bytes().await?;
    if file_name.is_empty() {
        return Ok(None);
    }
    Ok(Some(FileBlob::new(file_name, data)))
}

pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Vec<String>>> {
    let mut files = vec![];
    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "files" => {
                if let Some(blob) = read_blob(field).await? {
                    files.push(blob);
                }
            }
            _ => tracing::debug!("ignoring unknown upload field {}", &field_name),
        }
    }
    let paths = state.uploader.upload(&files).await?;
    tracing::info!("uploaded batch of {} files", paths.len());
    Ok(Json(paths))
}

pub async fn retrieve(
    State(state): State<AppState>,
    AxumPath(name): AxumPath<String>,
) -> Result<impl IntoResponse> {
    let path = state
        .uploader
        .resolve(&name)
        .ok_or_else(|| Error::UploadNotFound(name.clone()))?;
    let data = match fs::read(&path).await {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::UploadNotFound(name));
        }
        Err(e) => return Err(e.into()),
    };
    tracing::debug!("serving {}, size: {} bytes", &name, data.len());
    Ok((upload_headers(&name), data))
}

/// Uploads are user content: never sniffed, never run as a document, and
/// scriptable formats are downloaded rather than displayed.
fn upload_headers(name: &str) -> HeaderMap {
    let content_type = content_type_for(name);
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(CONTENT_SECURITY_POLICY, HeaderValue::from_static("sandbox"));
    if content_type == "image/svg+xml" {
        headers.insert(CONTENT_DISPOSITION, HeaderValue::from_static("attachment"));
    }
    headers
}
