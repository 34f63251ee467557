use axum::{
    Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    adapters::http::{app_state::AppState, routes::ApiResponse},
    app_error::AppResult,
    domain::entities::plan::{Plan, cents_to_amount},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_plans))
        .route("/{plan_id}", get(get_plan))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    id: Uuid,
    name: String,
    description: String,
    price: f64,
    currency: String,
    original_price: Option<f64>,
    features: Vec<String>,
    download_files: Vec<String>,
    is_popular: bool,
    is_best_value: bool,
    is_active: bool,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl From<Plan> for PlanResponse {
    fn from(plan: Plan) -> Self {
        Self {
            id: plan.id,
            is_active: plan.is_active(),
            name: plan.name,
            description: plan.description,
            price: cents_to_amount(plan.price_cents),
            currency: plan.currency,
            original_price: plan.original_price_cents.map(cents_to_amount),
            features: plan.features,
            download_files: plan.download_files,
            is_popular: plan.is_popular,
            is_best_value: plan.is_best_value,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
        }
    }
}

async fn list_plans(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let plans = app_state.catalog_use_cases.list_plans().await?;
    Ok(ApiResponse::ok(
        plans.into_iter().map(PlanResponse::from).collect::<Vec<_>>(),
    ))
}

async fn get_plan(
    State(app_state): State<AppState>,
    Path(plan_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let plan = app_state.catalog_use_cases.get_plan(&plan_id).await?;
    Ok(ApiResponse::ok(PlanResponse::from(plan)))
}
