use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::{
    adapters::files::{content_type_for, file_name_of},
    app_error::{AppError, AppResult},
    application::use_cases::download::{FileStore, StoredFile},
};

// ============================================================================
// InMemoryFileStore
// ============================================================================

/// File store holding small fake file bodies keyed by plan file identifier.
#[derive(Default)]
pub struct InMemoryFileStore {
    files: HashMap<String, Vec<u8>>,
}

impl InMemoryFileStore {
    pub fn with_files(paths: &[&str]) -> Self {
        let files = paths
            .iter()
            .map(|path| (path.to_string(), format!("contents of {path}").into_bytes()))
            .collect();
        Self { files }
    }
}

#[async_trait]
impl FileStore for InMemoryFileStore {
    async fn read(&self, file_path: &str) -> AppResult<StoredFile> {
        let bytes = self
            .files
            .get(file_path)
            .cloned()
            .ok_or_else(|| AppError::Internal(format!("missing file {file_path}")))?;
        Ok(StoredFile {
            file_name: file_name_of(file_path),
            content_type: content_type_for(file_path),
            bytes,
        })
    }
}

// ============================================================================
// InMemoryRateLimiter
// ============================================================================

/// In-memory rate limiter for testing.
/// Uses HashMap to track request counts per key.
pub struct InMemoryRateLimiter {
    counts: Mutex<HashMap<String, u64>>,
    max_per_ip: u64,
}

impl InMemoryRateLimiter {
    pub fn new(max_per_ip: u64) -> Self {
        Self {
            counts: Mutex::new(HashMap::new()),
            max_per_ip,
        }
    }

    /// Create a permissive rate limiter that never blocks (for most tests).
    pub fn permissive() -> Self {
        Self::new(u64::MAX)
    }
}

#[async_trait]
impl crate::infra::RateLimiterTrait for InMemoryRateLimiter {
    async fn check(&self, ip: &str) -> AppResult<()> {
        let mut counts = self.counts.lock().unwrap();

        let count = counts.entry(format!("rate:ip:{ip}")).or_insert(0);
        *count += 1;
        if *count > self.max_per_ip {
            return Err(AppError::RateLimited);
        }
        Ok(())
    }
}
