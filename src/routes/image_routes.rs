//! Rutas de imágenes (solo lectura)

use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::image_controller::ImageController;
use crate::models::image::{CarImage, PartImage};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_image_router() -> Router<AppState> {
    Router::new()
        .route("/cars", get(list_car_images))
        .route("/parts", get(list_part_images))
}

async fn list_car_images(State(state): State<AppState>) -> Result<Json<Vec<CarImage>>, AppError> {
    let controller = ImageController::new(state.pool.clone());
    let images = controller.car_images().await?;
    Ok(Json(images))
}

async fn list_part_images(State(state): State<AppState>) -> Result<Json<Vec<PartImage>>, AppError> {
    let controller = ImageController::new(state.pool.clone());
    let images = controller.part_images().await?;
    Ok(Json(images))
}
