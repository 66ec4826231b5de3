//! Controller de imágenes (solo lectura)

use sqlx::PgPool;

use crate::models::image::{CarImage, PartImage};
use crate::repositories::image_repository::ImageRepository;
use crate::utils::errors::AppError;

pub struct ImageController {
    repository: ImageRepository,
}

impl ImageController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ImageRepository::new(pool),
        }
    }

    pub async fn car_images(&self) -> Result<Vec<CarImage>, AppError> {
        self.repository.list_car_images().await
    }

    pub async fn part_images(&self) -> Result<Vec<PartImage>, AppError> {
        self.repository.list_part_images().await
    }
}
