use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::middleware::{AuthenticatedUser, JwtSecret};
use crate::auth::{jwt, password};
use crate::db::users as user_db;
use crate::error::ApiError;
use crate::models::users::{LoginUser, RegisterUser, UserResponse};
use crate::validation::validate_register;

/// POST /api/auth/register — create an account.
pub async fn register(
    db: web::Data<DatabaseConnection>,
    body: web::Json<RegisterUser>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    validate_register(&input)?;

    if user_db::find_by_username(db.get_ref(), &input.username)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("Username is already taken".to_string()));
    }
    if user_db::find_by_email(db.get_ref(), &input.email)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("Email is already registered".to_string()));
    }

    let hashed = password::hash_password(&input.password)?;
    let user = user_db::insert_user(db.get_ref(), input, hashed).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// POST /api/auth/login — verify credentials and issue a session token.
pub async fn login(
    db: web::Data<DatabaseConnection>,
    secret: web::Data<JwtSecret>,
    body: web::Json<LoginUser>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();

    // Same message for unknown username and wrong password.
    let invalid = || ApiError::Unauthenticated("Invalid username or password".to_string());

    let user = user_db::find_by_username(db.get_ref(), &input.username)
        .await?
        .ok_or_else(invalid)?;

    if !password::verify_password(&input.password, &user.password_hash)? {
        return Err(invalid());
    }

    let token = jwt::mint_token(user.id, &user.username, user.is_seller, &secret.0)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "token": token,
        "user": UserResponse::from(user),
    })))
}

/// GET /api/auth/me — the authenticated user's profile.
pub async fn me(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let profile = user_db::get_user_by_id(db.get_ref(), user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(UserResponse::from(profile)))
}
