//! PostgreSQL-backed `ProductStore`.

use super::{ProductStore, StoreError};
use crate::model::{Product, ProductDraft};
use async_trait::async_trait;
use sqlx::PgPool;

pub const PRODUCTS_TABLE: &str = "products";

const SELECT_COLUMNS: &str = "id, name, description, price, stock, created_at, modified_at";

/// Create the products table if missing. Idempotent; not a migration system.
pub async fn ensure_products_table(pool: &PgPool) -> Result<(), StoreError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            description VARCHAR(500),
            price NUMERIC(10, 2) NOT NULL CHECK (price > 0),
            stock INTEGER NOT NULL CHECK (stock >= 0),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            modified_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        PRODUCTS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    tracing::debug!(table = PRODUCTS_TABLE, "products table ensured");
    Ok(())
}

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        PgProductStore { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", SELECT_COLUMNS, PRODUCTS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<Product>, StoreError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", SELECT_COLUMNS, PRODUCTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let rows = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        if rows.len() > 1 {
            tracing::warn!(id, rows = rows.len(), "id lookup returned several rows, using the first");
        }
        Ok(rows.into_iter().next())
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, StoreError> {
        let sql = format!(
            "INSERT INTO {} (name, description, price, stock) VALUES ($1, $2, $3, $4) RETURNING {}",
            PRODUCTS_TABLE, SELECT_COLUMNS
        );
        tracing::debug!(sql = %sql, params = ?draft, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(draft.price)
            .bind(draft.stock)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, draft: &ProductDraft) -> Result<Option<Product>, StoreError> {
        let sql = format!(
            "UPDATE {} SET name = $2, description = $3, price = $4, stock = $5, modified_at = NOW() \
             WHERE id = $1 RETURNING {}",
            PRODUCTS_TABLE, SELECT_COLUMNS
        );
        tracing::debug!(sql = %sql, id, params = ?draft, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(draft.price)
            .bind(draft.stock)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", PRODUCTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
