use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    adapters::http::{app_state::AppState, extract::ApiJson, routes::ApiResponse},
    app_error::AppResult,
    application::use_cases::testimonial::SubmitTestimonialInput,
    domain::entities::testimonial::Testimonial,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_testimonials).post(submit_testimonial))
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct SubmitTestimonialPayload {
    name: String,
    location: String,
    rating: i64,
    text: String,
    plan_name: String,
    email: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TestimonialResponse {
    id: Uuid,
    name: String,
    location: String,
    rating: i16,
    text: String,
    plan_name: String,
    is_approved: bool,
    is_active: bool,
    created_at: NaiveDateTime,
}

impl From<Testimonial> for TestimonialResponse {
    fn from(testimonial: Testimonial) -> Self {
        Self {
            id: testimonial.id,
            is_active: testimonial.status.is_active(),
            name: testimonial.name,
            location: testimonial.location,
            rating: testimonial.rating,
            text: testimonial.text,
            plan_name: testimonial.plan_name,
            is_approved: testimonial.is_approved,
            created_at: testimonial.created_at,
        }
    }
}

#[derive(Serialize)]
struct SubmittedResponse {
    success: bool,
    message: &'static str,
}

async fn list_testimonials(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let testimonials = app_state.testimonial_use_cases.list_testimonials().await?;
    Ok(ApiResponse::ok(
        testimonials
            .into_iter()
            .map(TestimonialResponse::from)
            .collect::<Vec<_>>(),
    ))
}

async fn submit_testimonial(
    State(app_state): State<AppState>,
    ApiJson(payload): ApiJson<SubmitTestimonialPayload>,
) -> AppResult<impl IntoResponse> {
    let message = app_state
        .testimonial_use_cases
        .submit_testimonial(SubmitTestimonialInput {
            name: payload.name,
            location: payload.location,
            rating: payload.rating,
            text: payload.text,
            plan_name: payload.plan_name,
            email: payload.email,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmittedResponse {
            success: true,
            message,
        }),
    ))
}
