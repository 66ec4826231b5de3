//! Middleware de autenticación
//!
//! Extractores de Axum para el bearer token: `AuthUser` exige un token
//! válido y no revocado, `AdminUser` además exige rol de administrador,
//! `MaybeAuthUser` nunca rechaza (endpoints públicos con vista
//! privilegiada opcional).

use axum::{async_trait, extract::FromRequestParts, http::header::AUTHORIZATION,
    http::request::Parts};

use crate::models::user::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_token, JwtConfig};

/// Usuario autenticado extraído del bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub role: UserRole,
    pub token: String,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Falta el header Authorization".to_string()))?;

        let token = extract_token_from_header(auth_header)?;

        if state.is_token_revoked(token).await {
            return Err(AppError::Unauthorized("Token revocado".to_string()));
        }

        let jwt_config = JwtConfig::from(&state.config);
        let claims = verify_token(token, &jwt_config)?;

        Ok(AuthUser {
            id: claims.user_id()?,
            role: claims.user_role()?,
            token: token.to_string(),
        })
    }
}

/// Usuario autenticado con rol de administrador
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            return Err(AppError::Forbidden(
                "Se requiere rol de administrador".to_string(),
            ));
        }
        Ok(AdminUser(user))
    }
}

/// Usuario autenticado opcional: nunca rechaza el request
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

#[async_trait]
impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(
            AuthUser::from_request_parts(parts, state).await.ok(),
        ))
    }
}

impl MaybeAuthUser {
    /// Vista privilegiada: solo los administradores ven coches sin aprobar
    pub fn is_privileged(&self) -> bool {
        self.0.as_ref().map(|u| u.is_admin()).unwrap_or(false)
    }
}
