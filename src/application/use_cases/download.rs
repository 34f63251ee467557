use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::{tokens::hash_token, use_cases::order::OrderRepo},
};

/// Bytes of a purchased file together with how it should be presented.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Loads a file by the identifier stored on the plan (e.g. `/files/book.pdf`).
    async fn read(&self, file_path: &str) -> AppResult<StoredFile>;
}

#[derive(Debug, Clone)]
pub struct DownloadedFile {
    pub file: StoredFile,
    pub downloads_remaining: i32,
}

#[derive(Clone)]
pub struct DownloadUseCases {
    order_repo: Arc<dyn OrderRepo>,
    file_store: Arc<dyn FileStore>,
}

impl DownloadUseCases {
    pub fn new(order_repo: Arc<dyn OrderRepo>, file_store: Arc<dyn FileStore>) -> Self {
        Self {
            order_repo,
            file_store,
        }
    }

    /// Serves the file behind a download link and consumes one unit of the
    /// order's download quota.
    ///
    /// The quota is consumed by a single conditional increment in the
    /// repository, so concurrent requests can never succeed more than
    /// `max_downloads` times in total.
    #[instrument(skip(self, token))]
    pub async fn resolve_download(&self, order_id: &str, token: &str) -> AppResult<DownloadedFile> {
        let order = self
            .order_repo
            .get_active_by_number(order_id)
            .await?
            .ok_or(AppError::NotFound("Order"))?;

        if !order.payment_status.is_confirmed() {
            return Err(AppError::NotConfirmed);
        }

        let grant = self
            .order_repo
            .find_grant(order.id, &hash_token(token))
            .await?
            .ok_or(AppError::NotFound("Download link"))?;

        let now = Utc::now().naive_utc();
        if order.is_expired(now) {
            return Err(AppError::Expired);
        }
        if order.quota_exhausted() {
            return Err(AppError::QuotaExceeded);
        }

        // Load before claiming so a missing file does not burn a download.
        let file = self.file_store.read(&grant.file_path).await?;

        let Some(download_count) = self.order_repo.try_record_download(order.id, now).await?
        else {
            tracing::info!(order_id = %order.order_number, "Download refused after recheck");
            return Err(if order.is_expired(Utc::now().naive_utc()) {
                AppError::Expired
            } else {
                AppError::QuotaExceeded
            });
        };

        tracing::info!(
            order_id = %order.order_number,
            file = %grant.file_path,
            download_count,
            "Download served"
        );

        Ok(DownloadedFile {
            file,
            downloads_remaining: (order.max_downloads - download_count).max(0),
        })
    }
}
