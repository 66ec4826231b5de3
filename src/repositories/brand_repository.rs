//! Repositorio de marcas
//!
//! El borrado de una marca elimina también todos sus coches, en una
//! sola transacción. Es irreversible.

use chrono::Utc;
use sqlx::PgPool;

use crate::models::brand::Brand;
use crate::utils::errors::{not_found_error, AppError};

pub struct BrandRepository {
    pool: PgPool,
}

impl BrandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Brand>, AppError> {
        let brands = sqlx::query_as::<_, Brand>("SELECT * FROM brands ORDER BY label ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(brands)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Brand>, AppError> {
        let brand = sqlx::query_as::<_, Brand>("SELECT * FROM brands WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(brand)
    }

    pub async fn label_exists(&self, label: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM brands WHERE label = $1)")
            .bind(label)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    pub async fn create(&self, label: &str) -> Result<Brand, AppError> {
        let brand = sqlx::query_as::<_, Brand>(
            r#"
            INSERT INTO brands (label, created_at, updated_at)
            VALUES ($1, $2, $2)
            RETURNING *
            "#,
        )
        .bind(label)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(brand)
    }

    pub async fn update(&self, id: i64, label: &str) -> Result<Brand, AppError> {
        let brand = sqlx::query_as::<_, Brand>(
            r#"
            UPDATE brands
            SET label = $2, updated_at = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(label)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("Brand", id))?;

        Ok(brand)
    }

    /// Borrado en cascada: primero los coches de la marca, después la
    /// marca, todo dentro de la misma transacción
    pub async fn delete_cascade(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM cars WHERE brand_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM brands WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Brand", id));
        }

        tx.commit().await?;

        Ok(())
    }
}
