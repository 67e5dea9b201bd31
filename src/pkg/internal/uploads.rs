use std::path::{Component, Path, PathBuf};

use axum::body::Bytes;
use tokio::fs;
use uuid::Uuid;

use crate::prelude::{Error, Result};

/// One uploaded file held in memory.
#[derive(Debug, Clone)]
pub struct FileBlob {
    pub file_name: String,
    pub data: Bytes,
}

impl FileBlob {
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        FileBlob {
            file_name: file_name.into(),
            data: data.into(),
        }
    }
}

/// Writes uploads under generated names into one fixed directory.
#[derive(Debug, Clone)]
pub struct Uploader {
    dir: PathBuf,
    public_prefix: String,
    max_file_bytes: usize,
}

impl Uploader {
    pub fn new(dir: impl Into<PathBuf>, public_prefix: &str, max_file_bytes: usize) -> Self {
        Uploader {
            dir: dir.into(),
            public_prefix: public_prefix.trim_end_matches('/').to_string(),
            max_file_bytes,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes the batch in order. The first failure aborts the rest; files
    /// already written stay on disk.
    pub async fn upload(&self, files: &[FileBlob]) -> Result<Vec<String>> {
        fs::create_dir_all(&self.dir).await?;
        let mut paths = Vec::with_capacity(files.len());
        for file in files {
            if file.data.len() > self.max_file_bytes {
                return Err(Error::FileTooLarge {
                    name: file.file_name.clone(),
                    size: file.data.len(),
                    limit: self.max_file_bytes,
                });
            }
            let name = generated_name(&file.file_name);
            fs::write(self.dir.join(&name), &file.data).await?;
            tracing::debug!(
                "wrote {} ({} bytes) as {}",
                &file.file_name,
                file.data.len(),
                &name
            );
            paths.push(format!("{}/{}", &self.public_prefix, name));
        }
        Ok(paths)
    }

    pub async fn upload_one(&self, file: &FileBlob) -> Result<String> {
        let mut paths = self.upload(std::slice::from_ref(file)).await?;
        Ok(paths.remove(0))
    }

    /// Maps a public file name back to disk. Anything that is not a single
    /// plain path component is refused.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) if !name.contains('\\') => Some(self.dir.join(name)),
            _ => None,
        }
    }
}

/// Text after the last dot of the final path segment, dotfiles included
/// (`.bashrc` yields `bashrc`). Only ASCII alphanumeric extensions are kept
/// so every generated name stays resolvable.
fn extension_of(original: &str) -> Option<&str> {
    let base = original.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(original);
    let (_, ext) = base.rsplit_once('.')?;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext)
}

fn generated_name(original: &str) -> String {
    let id = Uuid::new_v4();
    match extension_of(original) {
        Some(ext) => format!("{}.{}", id, ext),
        None => id.to_string(),
    }
}

pub fn content_type_for(name: &str) -> &'static str {
    let ext = extension_of(name).unwrap_or("").to_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}
