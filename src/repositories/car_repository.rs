//! Repositorio de coches
//!
//! La verificación de existencia de la marca y la escritura posterior
//! van siempre dentro de la misma transacción: no hay ventana entre
//! el check y el insert/update.

use chrono::Utc;
use sqlx::PgPool;

use crate::dto::car_dto::NewCar;
use crate::models::car::{Car, CarStatus, CarWithBrand};
use crate::utils::errors::{not_found_error, reference_not_found_error, AppError};

pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, car: &NewCar, status: CarStatus) -> Result<Car, AppError> {
        let mut tx = self.pool.begin().await?;

        let brand_exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM brands WHERE id = $1)")
                .bind(car.brand_id)
                .fetch_one(&mut *tx)
                .await?;

        if !brand_exists.0 {
            return Err(reference_not_found_error("Brand", car.brand_id));
        }

        let created = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (
                brand_id, model, year, price, description, color, transmission,
                fuel_type, status, doors, total_weight, trunk_capacity, power,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $14)
            RETURNING *
            "#,
        )
        .bind(car.brand_id)
        .bind(&car.model)
        .bind(car.year)
        .bind(car.price)
        .bind(&car.description)
        .bind(&car.color)
        .bind(car.transmission)
        .bind(car.fuel_type)
        .bind(status)
        .bind(car.doors)
        .bind(car.total_weight)
        .bind(car.trunk_capacity)
        .bind(car.power)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(created)
    }

    /// Actualización completa: todos los campos se reescriben. Si el
    /// payload no trae status, se conserva el actual (la aprobación es
    /// exactamente una actualización con status = approved).
    pub async fn update(&self, id: i64, car: &NewCar) -> Result<Car, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found_error("Car", id))?;

        let brand_exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM brands WHERE id = $1)")
                .bind(car.brand_id)
                .fetch_one(&mut *tx)
                .await?;

        if !brand_exists.0 {
            return Err(reference_not_found_error("Brand", car.brand_id));
        }

        let status = car.status.unwrap_or(current.status);

        let updated = sqlx::query_as::<_, Car>(
            r#"
            UPDATE cars
            SET brand_id = $2, model = $3, year = $4, price = $5, description = $6,
                color = $7, transmission = $8, fuel_type = $9, status = $10,
                doors = $11, total_weight = $12, trunk_capacity = $13, power = $14,
                updated_at = $15
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(car.brand_id)
        .bind(&car.model)
        .bind(car.year)
        .bind(car.price)
        .bind(&car.description)
        .bind(&car.color)
        .bind(car.transmission)
        .bind(car.fuel_type)
        .bind(status)
        .bind(car.doors)
        .bind(car.total_weight)
        .bind(car.trunk_capacity)
        .bind(car.power)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(updated)
    }

    /// Listado con el label de la marca incorporado, filtrable por
    /// marca y por estado de moderación
    pub async fn list(
        &self,
        brand_id: Option<i64>,
        status: Option<CarStatus>,
    ) -> Result<Vec<CarWithBrand>, AppError> {
        let cars = sqlx::query_as::<_, CarWithBrand>(
            r#"
            SELECT cars.*, brands.label AS brand_label
            FROM cars
            JOIN brands ON brands.id = cars.brand_id
            WHERE ($1::BIGINT IS NULL OR cars.brand_id = $1)
              AND ($2::car_status IS NULL OR cars.status = $2)
            ORDER BY cars.created_at DESC
            "#,
        )
        .bind(brand_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Car>, AppError> {
        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(car)
    }

    /// Borrado definitivo. El rechazo de una submission es exactamente
    /// este borrado: no queda rastro del coche.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Car", id));
        }

        Ok(())
    }
}
