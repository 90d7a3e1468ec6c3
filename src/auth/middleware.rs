use actix_web::{Error, FromRequest, HttpRequest, dev::Payload, web};
use std::future::{Ready, ready};
use uuid::Uuid;

use crate::auth::jwt;
use crate::error::ApiError;

/// The authenticated identity for one request, decoded from the session JWT.
///
/// Produced at the boundary by the extractor and passed explicitly into
/// handlers; nothing reads session state from anywhere else.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
    pub is_seller: bool,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_user(req).map_err(Error::from))
    }
}

fn extract_user(req: &HttpRequest) -> Result<AuthenticatedUser, ApiError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthenticated("Missing Authorization header".to_string()))?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthenticated("Authorization header must be: Bearer <token>".to_string())
    })?;

    let secret = req
        .app_data::<web::Data<JwtSecret>>()
        .ok_or(ApiError::Internal)?;

    let claims = jwt::validate_token(token, &secret.0)
        .map_err(|e| ApiError::Unauthenticated(format!("Invalid token: {e}")))?;

    let user_id = claims.user_id().map_err(ApiError::Unauthenticated)?;

    Ok(AuthenticatedUser {
        id: user_id,
        username: claims.username,
        is_seller: claims.is_seller,
    })
}

/// Wrapper type to store the JWT secret in Actix app data.
#[derive(Clone)]
pub struct JwtSecret(pub String);
