//! Repositorio de repuestos

use chrono::Utc;
use sqlx::PgPool;

use crate::dto::part_dto::NewPart;
use crate::models::part::Part;
use crate::utils::errors::{not_found_error, AppError};

pub struct PartRepository {
    pool: PgPool,
}

impl PartRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Part>, AppError> {
        let parts = sqlx::query_as::<_, Part>("SELECT * FROM car_parts ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(parts)
    }

    pub async fn create(&self, part: &NewPart) -> Result<Part, AppError> {
        let created = sqlx::query_as::<_, Part>(
            r#"
            INSERT INTO car_parts (name, car_model, price, description, stock_quantity, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING *
            "#,
        )
        .bind(&part.name)
        .bind(&part.car_model)
        .bind(part.price)
        .bind(&part.description)
        .bind(part.stock_quantity)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn update(&self, id: i64, part: &NewPart) -> Result<Part, AppError> {
        let updated = sqlx::query_as::<_, Part>(
            r#"
            UPDATE car_parts
            SET name = $2, car_model = $3, price = $4, description = $5,
                stock_quantity = $6, updated_at = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&part.name)
        .bind(&part.car_model)
        .bind(part.price)
        .bind(&part.description)
        .bind(part.stock_quantity)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("Part", id))?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM car_parts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Part", id));
        }

        Ok(())
    }
}
