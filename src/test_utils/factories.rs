//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::{Duration, NaiveDateTime, Utc};
use uuid::Uuid;

use crate::{
    application::tokens::generate_order_number,
    domain::entities::{
        order::{DEFAULT_DOWNLOAD_TTL_DAYS, DEFAULT_MAX_DOWNLOADS, Order},
        payment_status::PaymentStatus,
        plan::Plan,
        record_status::RecordStatus,
        testimonial::Testimonial,
    },
};

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Create a test plan modelled on the Basic tier.
pub fn create_test_plan(overrides: impl FnOnce(&mut Plan)) -> Plan {
    let mut plan = Plan {
        id: Uuid::new_v4(),
        name: "Basic Plan".to_string(),
        description: "Essential English grammar foundations".to_string(),
        price_cents: 200,
        currency: "$".to_string(),
        original_price_cents: None,
        features: vec!["Core grammar rules".to_string(), "Lifetime access".to_string()],
        download_files: vec!["/files/basic-grammar-book.pdf".to_string()],
        is_popular: false,
        is_best_value: false,
        status: RecordStatus::Active,
        created_at: now(),
        updated_at: now(),
    };
    overrides(&mut plan);
    plan
}

/// Create a pending order for `plan`, priced and entitled the way order creation would.
pub fn create_test_order(plan: &Plan, overrides: impl FnOnce(&mut Order)) -> Order {
    let created_at = now();
    let mut order = Order {
        id: Uuid::new_v4(),
        order_number: generate_order_number(),
        customer_email: "customer@example.com".to_string(),
        customer_name: "Test Customer".to_string(),
        plan_id: plan.id,
        plan_name: plan.name.clone(),
        amount_cents: plan.price_cents,
        currency: plan.currency.clone(),
        payment_status: PaymentStatus::Pending,
        payment_proof: None,
        upi_transaction_id: None,
        notes: None,
        entitled_files: plan.download_files.clone(),
        download_links: vec![],
        download_count: 0,
        max_downloads: DEFAULT_MAX_DOWNLOADS,
        expires_at: created_at + Duration::days(DEFAULT_DOWNLOAD_TTL_DAYS),
        status: RecordStatus::Active,
        created_at,
        updated_at: created_at,
    };
    overrides(&mut order);
    order
}

/// Create an approved, visible testimonial.
pub fn create_test_testimonial(overrides: impl FnOnce(&mut Testimonial)) -> Testimonial {
    let mut testimonial = Testimonial {
        id: Uuid::new_v4(),
        name: "Priya Sharma".to_string(),
        location: "Mumbai, India".to_string(),
        rating: 5,
        text: "Clear explanations and useful examples.".to_string(),
        plan_name: "Basic Plan".to_string(),
        email: Some("priya@example.com".to_string()),
        is_approved: true,
        status: RecordStatus::Active,
        created_at: now(),
    };
    overrides(&mut testimonial);
    testimonial
}
