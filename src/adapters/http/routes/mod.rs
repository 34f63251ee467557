pub mod downloads;
pub mod orders;
pub mod plans;
pub mod testimonials;

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::adapters::http::app_state::AppState;

pub const API_VERSION: &str = "1.0";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(banner))
        .nest("/plans", plans::router())
        .nest("/orders", orders::router())
        .nest("/downloads", downloads::router())
        .nest("/testimonials", testimonials::router())
}

/// Success envelope shared by the JSON endpoints.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

#[derive(Serialize)]
struct BannerResponse {
    message: &'static str,
    version: &'static str,
}

async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "English Grammar Books API",
        version: API_VERSION,
    })
}
