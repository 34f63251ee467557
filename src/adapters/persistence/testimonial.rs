use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::testimonial::TestimonialRepo,
    domain::entities::testimonial::{NewTestimonial, Testimonial},
};

fn row_to_testimonial(row: sqlx::postgres::PgRow) -> Testimonial {
    Testimonial {
        id: row.get("id"),
        name: row.get("name"),
        location: row.get("location"),
        rating: row.get("rating"),
        text: row.get("text"),
        plan_name: row.get("plan_name"),
        email: row.get("email"),
        is_approved: row.get("is_approved"),
        status: row.get("status"),
        created_at: row.get("created_at"),
    }
}

const SELECT_COLS: &str =
    "id, name, location, rating, text, plan_name, email, is_approved, status, created_at";

#[async_trait]
impl TestimonialRepo for PostgresPersistence {
    async fn list_published(&self) -> AppResult<Vec<Testimonial>> {
        let rows = sqlx::query(&format!(
            r#"SELECT {} FROM testimonials
               WHERE is_approved = true AND status = 'active'
               ORDER BY created_at DESC
               LIMIT 100"#,
            SELECT_COLS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(rows.into_iter().map(row_to_testimonial).collect())
    }

    async fn create(&self, testimonial: &NewTestimonial) -> AppResult<Testimonial> {
        let row = sqlx::query(&format!(
            r#"INSERT INTO testimonials
                   (id, name, location, rating, text, plan_name, email, is_approved)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING {}"#,
            SELECT_COLS
        ))
        .bind(Uuid::new_v4())
        .bind(&testimonial.name)
        .bind(&testimonial.location)
        .bind(testimonial.rating)
        .bind(&testimonial.text)
        .bind(&testimonial.plan_name)
        .bind(&testimonial.email)
        .bind(testimonial.is_approved)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(row_to_testimonial(row))
    }

    async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM testimonials")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(count)
    }
}
