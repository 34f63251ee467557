use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::download::{FileStore, StoredFile},
};

/// Serves plan files from a directory on local disk.
///
/// Plan file identifiers look like absolute paths (`/files/book.pdf`); they are
/// always resolved inside `root`, never against the filesystem root.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, file_path: &str) -> AppResult<PathBuf> {
        let mut resolved = self.root.clone();
        for component in Path::new(file_path).components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::RootDir | Component::CurDir => {}
                Component::ParentDir | Component::Prefix(_) => {
                    return Err(AppError::Internal(format!(
                        "refusing to serve file outside storage root: {file_path}"
                    )));
                }
            }
        }
        if resolved == self.root {
            return Err(AppError::Internal(format!("empty file path: {file_path:?}")));
        }
        Ok(resolved)
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn read(&self, file_path: &str) -> AppResult<StoredFile> {
        let path = self.resolve(file_path)?;
        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "Failed to read download file");
            AppError::Internal(format!("cannot read {}: {e}", path.display()))
        })?;

        Ok(StoredFile {
            file_name: file_name_of(file_path),
            content_type: content_type_for(file_path),
            bytes,
        })
    }
}

/// Last path segment of a file identifier.
pub fn file_name_of(file_path: &str) -> String {
    file_path
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or("download")
        .to_string()
}

pub fn content_type_for(file_path: &str) -> &'static str {
    let extension = Path::new(file_path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("mp3") => "audio/mpeg",
        Some("m4a") => "audio/mp4",
        _ => "application/octet-stream",
    }
}
