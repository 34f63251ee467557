use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDateTime, Utc};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::{
        tokens::{download_url, generate_order_number, generate_token, hash_token},
        use_cases::catalog::{PlanRepo, parse_plan_id},
        validators,
    },
    domain::entities::{
        order::{
            DEFAULT_DOWNLOAD_TTL_DAYS, DEFAULT_MAX_DOWNLOADS, DownloadGrant, NewOrder, Order,
        },
        payment_status::PaymentStatus,
    },
};

pub const ORDER_CREATED_MESSAGE: &str = "Order created successfully. You will receive download links within 2-4 hours after payment confirmation.";
pub const ORDER_CONFIRMED_MESSAGE: &str = "Order confirmed successfully";
pub const ORDER_ALREADY_CONFIRMED_MESSAGE: &str = "Order already confirmed";

const MAX_NAME_CHARS: usize = 100;
const MAX_PAYMENT_PROOF_CHARS: usize = 500;
const MAX_UPI_TRANSACTION_CHARS: usize = 100;
const MAX_NOTES_CHARS: usize = 1000;

#[async_trait]
pub trait OrderRepo: Send + Sync {
    async fn create(&self, order: &NewOrder) -> AppResult<Order>;
    async fn get_active_by_number(&self, order_number: &str) -> AppResult<Option<Order>>;
    /// Stores the grants and links and flips the order to confirmed, all at
    /// once. Returns `false` without writing anything when the order was no
    /// longer pending.
    async fn confirm(
        &self,
        order_id: Uuid,
        grants: &[DownloadGrant],
        download_links: &[String],
        now: NaiveDateTime,
    ) -> AppResult<bool>;
    async fn find_grant(&self, order_id: Uuid, token_hash: &str)
    -> AppResult<Option<DownloadGrant>>;
    /// Increments the download counter only while the order is confirmed,
    /// unexpired at `now` and below its quota. Returns the new count, or
    /// `None` when any of those conditions failed.
    async fn try_record_download(&self, order_id: Uuid, now: NaiveDateTime)
    -> AppResult<Option<i32>>;
}

/// Entitlement limits applied to new orders.
#[derive(Debug, Clone, Copy)]
pub struct OrderPolicy {
    pub max_downloads: i32,
    pub download_ttl: Duration,
}

impl Default for OrderPolicy {
    fn default() -> Self {
        Self {
            max_downloads: DEFAULT_MAX_DOWNLOADS,
            download_ttl: Duration::days(DEFAULT_DOWNLOAD_TTL_DAYS),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateOrderInput {
    pub customer_email: String,
    pub customer_name: String,
    pub plan_id: String,
    pub payment_proof: Option<String>,
    pub upi_transaction_id: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreatedOrder {
    pub order_id: String,
    pub message: &'static str,
}

#[derive(Debug, Clone)]
pub struct ConfirmedOrder {
    pub download_links: Vec<String>,
    pub message: &'static str,
}

#[derive(Clone)]
pub struct OrderUseCases {
    order_repo: Arc<dyn OrderRepo>,
    plan_repo: Arc<dyn PlanRepo>,
    policy: OrderPolicy,
}

impl OrderUseCases {
    pub fn new(
        order_repo: Arc<dyn OrderRepo>,
        plan_repo: Arc<dyn PlanRepo>,
        policy: OrderPolicy,
    ) -> Self {
        Self {
            order_repo,
            plan_repo,
            policy,
        }
    }

    #[instrument(skip(self, input), fields(plan_id = %input.plan_id))]
    pub async fn create_order(&self, input: CreateOrderInput) -> AppResult<CreatedOrder> {
        let customer_email = validators::email("customerEmail", &input.customer_email)?;
        let customer_name =
            validators::required_text("customerName", &input.customer_name, MAX_NAME_CHARS)?;
        if input.plan_id.trim().is_empty() {
            return Err(AppError::validation("planId", "is required"));
        }
        let payment_proof = validators::optional_text(
            "paymentProof",
            input.payment_proof.as_deref(),
            MAX_PAYMENT_PROOF_CHARS,
        )?;
        let upi_transaction_id = validators::optional_text(
            "upiTransactionId",
            input.upi_transaction_id.as_deref(),
            MAX_UPI_TRANSACTION_CHARS,
        )?;
        let notes = validators::optional_text("notes", input.notes.as_deref(), MAX_NOTES_CHARS)?;

        let plan = self
            .plan_repo
            .get_active_by_id(parse_plan_id(&input.plan_id)?)
            .await?
            .ok_or(AppError::NotFound("Plan"))?;

        let now = Utc::now().naive_utc();
        let new_order = NewOrder {
            order_number: generate_order_number(),
            customer_email,
            customer_name,
            plan_id: plan.id,
            plan_name: plan.name,
            amount_cents: plan.price_cents,
            currency: plan.currency,
            payment_proof,
            upi_transaction_id,
            notes,
            entitled_files: plan.download_files,
            max_downloads: self.policy.max_downloads,
            expires_at: now + self.policy.download_ttl,
            created_at: now,
        };

        let order = self.order_repo.create(&new_order).await?;
        tracing::info!(order_id = %order.order_number, "Order created");

        Ok(CreatedOrder {
            order_id: order.order_number,
            message: ORDER_CREATED_MESSAGE,
        })
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: &str) -> AppResult<Order> {
        self.order_repo
            .get_active_by_number(order_id)
            .await?
            .ok_or(AppError::NotFound("Order"))
    }

    /// Confirms payment and issues one download link per entitled file.
    ///
    /// Confirming an already confirmed order returns the links issued the
    /// first time; tokens are never rotated.
    #[instrument(skip(self))]
    pub async fn confirm_order(&self, order_id: &str) -> AppResult<ConfirmedOrder> {
        let order = self.get_order(order_id).await?;

        match order.payment_status {
            PaymentStatus::Confirmed => return Ok(already_confirmed(order)),
            PaymentStatus::Failed => {
                return Err(AppError::InvalidInput(
                    "Order payment is marked as failed and cannot be confirmed".into(),
                ));
            }
            PaymentStatus::Pending => {}
        }

        let mut grants = Vec::with_capacity(order.entitled_files.len());
        let mut download_links = Vec::with_capacity(order.entitled_files.len());
        for (position, file_path) in order.entitled_files.iter().enumerate() {
            let token = generate_token();
            download_links.push(download_url(&order.order_number, &token));
            grants.push(DownloadGrant {
                token_hash: hash_token(&token),
                order_id: order.id,
                file_path: file_path.clone(),
                position: i32::try_from(position)
                    .map_err(|_| AppError::Internal("too many entitled files".into()))?,
            });
        }

        let now = Utc::now().naive_utc();
        let confirmed = self
            .order_repo
            .confirm(order.id, &grants, &download_links, now)
            .await?;

        if !confirmed {
            // Another confirmation won the race; hand out the links it stored.
            let current = self.get_order(order_id).await?;
            if current.payment_status.is_confirmed() {
                return Ok(already_confirmed(current));
            }
            return Err(AppError::InvalidInput(
                "Order can no longer be confirmed".into(),
            ));
        }

        tracing::info!(
            order_id = %order.order_number,
            links = download_links.len(),
            "Order confirmed"
        );

        Ok(ConfirmedOrder {
            download_links,
            message: ORDER_CONFIRMED_MESSAGE,
        })
    }
}

fn already_confirmed(order: Order) -> ConfirmedOrder {
    ConfirmedOrder {
        download_links: order.download_links,
        message: ORDER_ALREADY_CONFIRMED_MESSAGE,
    }
}
