use chrono::NaiveDateTime;
use uuid::Uuid;

use super::record_status::RecordStatus;

/// A fixed-price bundle of downloadable files.
#[derive(Debug, Clone)]
pub struct Plan {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price_cents: i32,
    pub currency: String,
    /// Display-only "was" price.
    pub original_price_cents: Option<i32>,
    pub features: Vec<String>,
    /// File identifiers an order for this plan is entitled to, in order.
    pub download_files: Vec<String>,
    pub is_popular: bool,
    pub is_best_value: bool,
    pub status: RecordStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Plan {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// Catalog entry as written by the seed job. Plans are keyed by name.
#[derive(Debug, Clone)]
pub struct NewPlan {
    pub name: String,
    pub description: String,
    pub price_cents: i32,
    pub currency: String,
    pub original_price_cents: Option<i32>,
    pub features: Vec<String>,
    pub download_files: Vec<String>,
    pub is_popular: bool,
    pub is_best_value: bool,
}

/// Renders integer cents as a decimal amount (`200` -> `2.0`).
pub fn cents_to_amount(cents: i32) -> f64 {
    f64::from(cents) / 100.0
}
