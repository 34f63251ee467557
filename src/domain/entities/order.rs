use chrono::NaiveDateTime;
use uuid::Uuid;

use super::{payment_status::PaymentStatus, record_status::RecordStatus};

pub const DEFAULT_MAX_DOWNLOADS: i32 = 5;
pub const DEFAULT_DOWNLOAD_TTL_DAYS: i64 = 30;

/// A customer's purchase of one plan.
///
/// `plan_name`, `amount_cents`, `currency` and `entitled_files` are copied from
/// the plan when the order is created and never follow later plan edits.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    /// Human-readable identifier handed to the customer (`ORDER_...`).
    pub order_number: String,
    pub customer_email: String,
    pub customer_name: String,
    pub plan_id: Uuid,
    pub plan_name: String,
    pub amount_cents: i32,
    pub currency: String,
    pub payment_status: PaymentStatus,
    pub payment_proof: Option<String>,
    pub upi_transaction_id: Option<String>,
    pub notes: Option<String>,
    pub entitled_files: Vec<String>,
    /// Empty until the payment is confirmed, then one link per entitled file.
    pub download_links: Vec<String>,
    pub download_count: i32,
    pub max_downloads: i32,
    pub expires_at: NaiveDateTime,
    pub status: RecordStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Order {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Downloads are refused strictly after `expires_at`.
    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        now > self.expires_at
    }

    pub fn downloads_remaining(&self) -> i32 {
        (self.max_downloads - self.download_count).max(0)
    }

    pub fn quota_exhausted(&self) -> bool {
        self.download_count >= self.max_downloads
    }
}

/// Fields of an order at creation time.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order_number: String,
    pub customer_email: String,
    pub customer_name: String,
    pub plan_id: Uuid,
    pub plan_name: String,
    pub amount_cents: i32,
    pub currency: String,
    pub payment_proof: Option<String>,
    pub upi_transaction_id: Option<String>,
    pub notes: Option<String>,
    pub entitled_files: Vec<String>,
    pub max_downloads: i32,
    pub expires_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

/// One minted download token, stored by hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadGrant {
    pub token_hash: String,
    pub order_id: Uuid,
    pub file_path: String,
    pub position: i32,
}
