use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::{PostgresPersistence, parse_json_with_fallback},
    app_error::{AppError, AppResult},
    application::use_cases::order::OrderRepo,
    domain::entities::order::{DownloadGrant, NewOrder, Order},
};

fn row_to_order(row: sqlx::postgres::PgRow) -> Order {
    let order_number: String = row.get("order_number");

    Order {
        id: row.get("id"),
        entitled_files: parse_json_with_fallback(
            &row.get::<serde_json::Value, _>("entitled_files"),
            "entitled_files",
            "order",
            &order_number,
        ),
        download_links: parse_json_with_fallback(
            &row.get::<serde_json::Value, _>("download_links"),
            "download_links",
            "order",
            &order_number,
        ),
        order_number,
        customer_email: row.get("customer_email"),
        customer_name: row.get("customer_name"),
        plan_id: row.get("plan_id"),
        plan_name: row.get("plan_name"),
        amount_cents: row.get("amount_cents"),
        currency: row.get("currency"),
        payment_status: row.get("payment_status"),
        payment_proof: row.get("payment_proof"),
        upi_transaction_id: row.get("upi_transaction_id"),
        notes: row.get("notes"),
        download_count: row.get("download_count"),
        max_downloads: row.get("max_downloads"),
        expires_at: row.get("expires_at"),
        status: row.get("status"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

const SELECT_COLS: &str = r#"
    id, order_number, customer_email, customer_name, plan_id, plan_name,
    amount_cents, currency, payment_status, payment_proof, upi_transaction_id, notes,
    entitled_files, download_links, download_count, max_downloads, expires_at,
    status, created_at, updated_at
"#;

#[async_trait]
impl OrderRepo for PostgresPersistence {
    async fn create(&self, order: &NewOrder) -> AppResult<Order> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO orders
                (id, order_number, customer_email, customer_name, plan_id, plan_name,
                 amount_cents, currency, payment_proof, upi_transaction_id, notes,
                 entitled_files, max_downloads, expires_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $15)
            RETURNING {}
            "#,
            SELECT_COLS
        ))
        .bind(Uuid::new_v4())
        .bind(&order.order_number)
        .bind(&order.customer_email)
        .bind(&order.customer_name)
        .bind(order.plan_id)
        .bind(&order.plan_name)
        .bind(order.amount_cents)
        .bind(&order.currency)
        .bind(&order.payment_proof)
        .bind(&order.upi_transaction_id)
        .bind(&order.notes)
        .bind(serde_json::json!(order.entitled_files))
        .bind(order.max_downloads)
        .bind(order.expires_at)
        .bind(order.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(row_to_order(row))
    }

    async fn get_active_by_number(&self, order_number: &str) -> AppResult<Option<Order>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM orders WHERE order_number = $1 AND status = 'active'",
            SELECT_COLS
        ))
        .bind(order_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(row.map(row_to_order))
    }

    async fn confirm(
        &self,
        order_id: Uuid,
        grants: &[DownloadGrant],
        download_links: &[String],
        now: NaiveDateTime,
    ) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(AppError::from)?;

        // The row lock taken here serializes concurrent confirmations; the
        // loser re-evaluates the predicate after the winner commits.
        let updated = sqlx::query(
            r#"UPDATE orders
               SET payment_status = 'confirmed',
                   download_links = $2,
                   updated_at = $3
               WHERE id = $1 AND payment_status = 'pending' AND status = 'active'"#,
        )
        .bind(order_id)
        .bind(serde_json::json!(download_links))
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(AppError::from)?
        .rows_affected();

        if updated == 0 {
            tx.rollback().await.map_err(AppError::from)?;
            return Ok(false);
        }

        for grant in grants {
            sqlx::query(
                r#"INSERT INTO download_grants (token_hash, order_id, file_path, position, created_at)
                   VALUES ($1, $2, $3, $4, $5)"#,
            )
            .bind(&grant.token_hash)
            .bind(grant.order_id)
            .bind(&grant.file_path)
            .bind(grant.position)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(AppError::from)?;
        }

        tx.commit().await.map_err(AppError::from)?;
        Ok(true)
    }

    async fn find_grant(
        &self,
        order_id: Uuid,
        token_hash: &str,
    ) -> AppResult<Option<DownloadGrant>> {
        let row = sqlx::query(
            r#"SELECT token_hash, order_id, file_path, position
               FROM download_grants
               WHERE token_hash = $1 AND order_id = $2"#,
        )
        .bind(token_hash)
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row.map(|r| DownloadGrant {
            token_hash: r.get("token_hash"),
            order_id: r.get("order_id"),
            file_path: r.get("file_path"),
            position: r.get("position"),
        }))
    }

    async fn try_record_download(
        &self,
        order_id: Uuid,
        now: NaiveDateTime,
    ) -> AppResult<Option<i32>> {
        let count: Option<i32> = sqlx::query_scalar(
            r#"UPDATE orders
               SET download_count = download_count + 1,
                   updated_at = $2
               WHERE id = $1
                 AND status = 'active'
                 AND payment_status = 'confirmed'
                 AND expires_at >= $2
                 AND download_count < max_downloads
               RETURNING download_count"#,
        )
        .bind(order_id)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(count)
    }
}
