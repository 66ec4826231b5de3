mod config;
mod controllers;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use config::{DatabaseConfig, EnvironmentConfig};
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Car Marketplace - API REST");
    info!("=============================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match DatabaseConfig::default().create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    info!("✅ PostgreSQL conectado exitosamente");

    // CORS: orígenes explícitos en producción, permisivo en desarrollo
    let cors = if config.is_production() {
        cors_middleware_with_origins(&config.cors_origins)
    } else {
        cors_middleware()
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/car", routes::car_routes::create_car_router())
        .nest("/api/brand", routes::brand_routes::create_brand_router())
        .nest("/api/part", routes::part_routes::create_part_router())
        .nest("/api/user", routes::user_routes::create_user_router())
        .nest("/api/image", routes::image_routes::create_image_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚗 Endpoints - Car:");
    info!("   GET    /api/car - Listar coches (público: solo aprobados)");
    info!("   POST   /api/car - Enviar coche (entra en moderación)");
    info!("   PUT    /api/car/:id - Actualizar/aprobar coche (admin)");
    info!("   DELETE /api/car/:id - Eliminar/rechazar coche (admin)");
    info!("   GET    /api/car/submissions - Pendientes de moderación (admin)");
    info!("🏷  Endpoints - Brand:");
    info!("   GET    /api/brand - Listar marcas");
    info!("   POST   /api/brand - Crear marca (admin)");
    info!("   PUT    /api/brand/:id - Renombrar marca (admin)");
    info!("   DELETE /api/brand/:id - Eliminar marca y sus coches (admin)");
    info!("🔧 Endpoints - Part:");
    info!("   GET    /api/part - Listar repuestos");
    info!("   POST   /api/part - Crear repuesto");
    info!("   PUT    /api/part/:id - Actualizar repuesto (admin)");
    info!("   DELETE /api/part/:id - Eliminar repuesto (admin)");
    info!("👤 Endpoints - User:");
    info!("   POST /api/user/register - Registro");
    info!("   POST /api/user/login - Login");
    info!("   POST /api/user/logout - Logout (revoca el token)");
    info!("   GET  /api/user/me - Usuario actual");
    info!("   GET  /api/user - Listar usuarios");
    info!("   PUT  /api/user/:id - Actualizar usuario (admin)");
    info!("   DELETE /api/user/:id - Eliminar usuario (admin)");
    info!("🖼  Endpoints - Image:");
    info!("   GET  /api/image/cars - Imágenes de coches");
    info!("   GET  /api/image/parts - Imágenes de repuestos");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "car-marketplace",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
