use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ERR-IO-001: {0}")]
    Io(#[from] std::io::Error),
    #[error("ERR-UPLOAD-001: {0}")]
    Multipart(#[from] MultipartError),
    #[error("ERR-UPLOAD-002: {name} is {size} bytes, the limit is {limit}")]
    FileTooLarge {
        name: String,
        size: usize,
        limit: usize,
    },
    #[error("ERR-TEMPLATE-001: {0}")]
    Template(#[from] askama::Error),
    #[error("ERR-FETCH-001: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("ERR-JSON-001: {0}")]
    Json(#[from] serde_json::Error),
    #[error("ERR-STUDENT-404: no student with id {0}")]
    StudentNotFound(String),
    #[error("ERR-UPLOAD-404: no upload named {0}")]
    UploadNotFound(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Multipart(e) => e.status(),
            Error::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Error::StudentNotFound(_) | Error::UploadNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", &self);
        } else {
            tracing::debug!("request rejected: {}", &self);
        }
        (status, self.to_string()).into_response()
    }
}
