//! In-memory mock implementation of the order repository.
//!
//! `confirm` and `try_record_download` run entirely under the orders lock so
//! they are as atomic as the guarded SQL updates they stand in for.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::order::OrderRepo,
    domain::entities::{
        order::{DownloadGrant, NewOrder, Order},
        payment_status::PaymentStatus,
        record_status::RecordStatus,
    },
};

#[derive(Default)]
pub struct InMemoryOrderRepo {
    pub orders: Mutex<HashMap<Uuid, Order>>,
    pub grants: Mutex<Vec<DownloadGrant>>,
}

impl InMemoryOrderRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, order: Order) {
        self.orders.lock().unwrap().insert(order.id, order);
    }

    /// Mutate a stored order in place (e.g. to move its expiry into the past).
    pub fn update(&self, order_number: &str, f: impl FnOnce(&mut Order)) {
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .values_mut()
            .find(|o| o.order_number == order_number)
            .expect("order to update must exist");
        f(order);
    }
}

#[async_trait]
impl OrderRepo for InMemoryOrderRepo {
    async fn create(&self, order: &NewOrder) -> AppResult<Order> {
        let mut orders = self.orders.lock().unwrap();

        if orders
            .values()
            .any(|o| o.order_number == order.order_number)
        {
            return Err(AppError::Database("duplicate order number".into()));
        }

        let stored = Order {
            id: Uuid::new_v4(),
            order_number: order.order_number.clone(),
            customer_email: order.customer_email.clone(),
            customer_name: order.customer_name.clone(),
            plan_id: order.plan_id,
            plan_name: order.plan_name.clone(),
            amount_cents: order.amount_cents,
            currency: order.currency.clone(),
            payment_status: PaymentStatus::Pending,
            payment_proof: order.payment_proof.clone(),
            upi_transaction_id: order.upi_transaction_id.clone(),
            notes: order.notes.clone(),
            entitled_files: order.entitled_files.clone(),
            download_links: vec![],
            download_count: 0,
            max_downloads: order.max_downloads,
            expires_at: order.expires_at,
            status: RecordStatus::Active,
            created_at: order.created_at,
            updated_at: order.created_at,
        };

        orders.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn get_active_by_number(&self, order_number: &str) -> AppResult<Option<Order>> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .values()
            .find(|o| o.order_number == order_number && o.is_active())
            .cloned())
    }

    async fn confirm(
        &self,
        order_id: Uuid,
        grants: &[DownloadGrant],
        download_links: &[String],
        now: NaiveDateTime,
    ) -> AppResult<bool> {
        let mut orders = self.orders.lock().unwrap();
        let Some(order) = orders
            .get_mut(&order_id)
            .filter(|o| o.is_active() && o.payment_status.can_confirm())
        else {
            return Ok(false);
        };

        order.payment_status = PaymentStatus::Confirmed;
        order.download_links = download_links.to_vec();
        order.updated_at = now;
        self.grants.lock().unwrap().extend_from_slice(grants);
        Ok(true)
    }

    async fn find_grant(
        &self,
        order_id: Uuid,
        token_hash: &str,
    ) -> AppResult<Option<DownloadGrant>> {
        Ok(self
            .grants
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.order_id == order_id && g.token_hash == token_hash)
            .cloned())
    }

    async fn try_record_download(
        &self,
        order_id: Uuid,
        now: NaiveDateTime,
    ) -> AppResult<Option<i32>> {
        let mut orders = self.orders.lock().unwrap();
        let Some(order) = orders.get_mut(&order_id).filter(|o| {
            o.is_active()
                && o.payment_status.is_confirmed()
                && !o.is_expired(now)
                && !o.quota_exhausted()
        }) else {
            return Ok(None);
        };

        order.download_count += 1;
        order.updated_at = now;
        Ok(Some(order.download_count))
    }
}
