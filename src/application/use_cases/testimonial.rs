use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::validators,
    domain::entities::testimonial::{NewTestimonial, Testimonial},
};

pub const TESTIMONIAL_SUBMITTED_MESSAGE: &str =
    "Thank you for your feedback! Your testimonial is under review.";

#[async_trait]
pub trait TestimonialRepo: Send + Sync {
    /// Approved and active testimonials, newest first.
    async fn list_published(&self) -> AppResult<Vec<Testimonial>>;
    async fn create(&self, testimonial: &NewTestimonial) -> AppResult<Testimonial>;
    async fn count(&self) -> AppResult<i64>;
}

#[derive(Debug, Clone, Default)]
pub struct SubmitTestimonialInput {
    pub name: String,
    pub location: String,
    pub rating: i64,
    pub text: String,
    pub plan_name: String,
    pub email: Option<String>,
}

#[derive(Clone)]
pub struct TestimonialUseCases {
    repo: Arc<dyn TestimonialRepo>,
}

impl TestimonialUseCases {
    pub fn new(repo: Arc<dyn TestimonialRepo>) -> Self {
        Self { repo }
    }

    pub async fn list_testimonials(&self) -> AppResult<Vec<Testimonial>> {
        self.repo.list_published().await
    }

    /// Stores a testimonial for moderation. It stays hidden until approved.
    #[instrument(skip(self, input))]
    pub async fn submit_testimonial(&self, input: SubmitTestimonialInput) -> AppResult<&'static str> {
        let name = validators::required_text("name", &input.name, 100)?;
        let location = validators::required_text("location", &input.location, 100)?;
        let text = validators::required_text("text", &input.text, 2000)?;
        let plan_name = validators::required_text("planName", &input.plan_name, 100)?;
        if !(1..=5).contains(&input.rating) {
            return Err(AppError::validation("rating", "must be between 1 and 5"));
        }
        let email = match input.email.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(email) => Some(validators::email("email", email)?),
        };

        let testimonial = self
            .repo
            .create(&NewTestimonial {
                name,
                location,
                rating: input.rating as i16,
                text,
                plan_name,
                email,
                is_approved: false,
            })
            .await?;
        tracing::info!(testimonial_id = %testimonial.id, "Testimonial submitted for review");

        Ok(TESTIMONIAL_SUBMITTED_MESSAGE)
    }
}
