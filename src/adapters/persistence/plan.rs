use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::{PostgresPersistence, parse_json_with_fallback},
    app_error::{AppError, AppResult},
    application::use_cases::catalog::PlanRepo,
    domain::entities::plan::{NewPlan, Plan},
};

fn row_to_plan(row: sqlx::postgres::PgRow) -> Plan {
    let id: Uuid = row.get("id");
    let entity_id = id.to_string();

    Plan {
        id,
        name: row.get("name"),
        description: row.get("description"),
        price_cents: row.get("price_cents"),
        currency: row.get("currency"),
        original_price_cents: row.get("original_price_cents"),
        features: parse_json_with_fallback(
            &row.get::<serde_json::Value, _>("features"),
            "features",
            "plan",
            &entity_id,
        ),
        download_files: parse_json_with_fallback(
            &row.get::<serde_json::Value, _>("download_files"),
            "download_files",
            "plan",
            &entity_id,
        ),
        is_popular: row.get("is_popular"),
        is_best_value: row.get("is_best_value"),
        status: row.get("status"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

const SELECT_COLS: &str = r#"
    id, name, description, price_cents, currency, original_price_cents,
    features, download_files, is_popular, is_best_value, status, created_at, updated_at
"#;

#[async_trait]
impl PlanRepo for PostgresPersistence {
    async fn get_active_by_id(&self, id: Uuid) -> AppResult<Option<Plan>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM plans WHERE id = $1 AND status = 'active'",
            SELECT_COLS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(row.map(row_to_plan))
    }

    async fn list_active(&self) -> AppResult<Vec<Plan>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM plans WHERE status = 'active' ORDER BY price_cents, created_at",
            SELECT_COLS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(rows.into_iter().map(row_to_plan).collect())
    }

    async fn upsert(&self, plan: &NewPlan) -> AppResult<Plan> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO plans
                (id, name, description, price_cents, currency, original_price_cents,
                 features, download_files, is_popular, is_best_value)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (name) DO UPDATE SET
                description = EXCLUDED.description,
                price_cents = EXCLUDED.price_cents,
                currency = EXCLUDED.currency,
                original_price_cents = EXCLUDED.original_price_cents,
                features = EXCLUDED.features,
                download_files = EXCLUDED.download_files,
                is_popular = EXCLUDED.is_popular,
                is_best_value = EXCLUDED.is_best_value,
                updated_at = (now() AT TIME ZONE 'utc')
            RETURNING {}
            "#,
            SELECT_COLS
        ))
        .bind(Uuid::new_v4())
        .bind(&plan.name)
        .bind(&plan.description)
        .bind(plan.price_cents)
        .bind(&plan.currency)
        .bind(plan.original_price_cents)
        .bind(serde_json::json!(plan.features))
        .bind(serde_json::json!(plan.download_files))
        .bind(plan.is_popular)
        .bind(plan.is_best_value)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(row_to_plan(row))
    }
}
