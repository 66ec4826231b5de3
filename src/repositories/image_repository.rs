//! Repositorio de imágenes de coches y repuestos

use sqlx::PgPool;

use crate::models::image::{CarImage, PartImage};
use crate::utils::errors::AppError;

pub struct ImageRepository {
    pool: PgPool,
}

impl ImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_car_images(&self) -> Result<Vec<CarImage>, AppError> {
        let images = sqlx::query_as::<_, CarImage>("SELECT * FROM car_images ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(images)
    }

    pub async fn list_part_images(&self) -> Result<Vec<PartImage>, AppError> {
        let images =
            sqlx::query_as::<_, PartImage>("SELECT * FROM car_part_images ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(images)
    }
}
