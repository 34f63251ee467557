use axum::{
    Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post, put},
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    adapters::http::{app_state::AppState, extract::ApiJson, routes::ApiResponse},
    app_error::AppResult,
    application::use_cases::order::CreateOrderInput,
    domain::entities::{
        order::Order, payment_status::PaymentStatus, plan::cents_to_amount,
    },
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/{order_id}", get(get_order))
        .route("/{order_id}/confirm", put(confirm_order))
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct CreateOrderPayload {
    customer_email: String,
    customer_name: String,
    plan_id: String,
    payment_proof: Option<String>,
    upi_transaction_id: Option<String>,
    notes: Option<String>,
}

impl From<CreateOrderPayload> for CreateOrderInput {
    fn from(payload: CreateOrderPayload) -> Self {
        Self {
            customer_email: payload.customer_email,
            customer_name: payload.customer_name,
            plan_id: payload.plan_id,
            payment_proof: payload.payment_proof,
            upi_transaction_id: payload.upi_transaction_id,
            notes: payload.notes,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatedOrderResponse {
    order_id: String,
    message: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfirmedOrderResponse {
    download_links: Vec<String>,
    message: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderResponse {
    id: Uuid,
    order_id: String,
    customer_email: String,
    customer_name: String,
    plan_id: Uuid,
    plan_name: String,
    amount: f64,
    currency: String,
    payment_status: PaymentStatus,
    payment_proof: Option<String>,
    upi_transaction_id: Option<String>,
    notes: Option<String>,
    download_links: Vec<String>,
    download_count: i32,
    max_downloads: i32,
    downloads_remaining: i32,
    expires_at: NaiveDateTime,
    is_active: bool,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            is_active: order.is_active(),
            downloads_remaining: order.downloads_remaining(),
            order_id: order.order_number,
            customer_email: order.customer_email,
            customer_name: order.customer_name,
            plan_id: order.plan_id,
            plan_name: order.plan_name,
            amount: cents_to_amount(order.amount_cents),
            currency: order.currency,
            payment_status: order.payment_status,
            payment_proof: order.payment_proof,
            upi_transaction_id: order.upi_transaction_id,
            notes: order.notes,
            download_links: order.download_links,
            download_count: order.download_count,
            max_downloads: order.max_downloads,
            expires_at: order.expires_at,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

async fn create_order(
    State(app_state): State<AppState>,
    ApiJson(payload): ApiJson<CreateOrderPayload>,
) -> AppResult<impl IntoResponse> {
    let created = app_state
        .order_use_cases
        .create_order(payload.into())
        .await?;

    Ok(ApiResponse::ok(CreatedOrderResponse {
        order_id: created.order_id,
        message: created.message,
    }))
}

async fn get_order(
    State(app_state): State<AppState>,
    Path(order_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let order = app_state.order_use_cases.get_order(&order_id).await?;
    Ok(ApiResponse::ok(OrderResponse::from(order)))
}

async fn confirm_order(
    State(app_state): State<AppState>,
    Path(order_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let confirmed = app_state.order_use_cases.confirm_order(&order_id).await?;
    Ok(ApiResponse::ok(ConfirmedOrderResponse {
        download_links: confirmed.download_links,
        message: confirmed.message,
    }))
}
