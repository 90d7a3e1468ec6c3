use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::conversations as conversation_db;
use crate::error::{ApiError, FieldError};
use crate::models::conversations::{CreateConversation, RoleSplit};

/// POST /api/conversations — find or create the thread with a counterpart.
///
/// Roles are assigned from the caller's seller flag; the creator's side
/// starts read, the counterpart's unread. One conversation per
/// (seller, buyer) pair: an existing thread comes back with 200, a new
/// one with 201.
pub async fn create_conversation(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateConversation>,
) -> Result<HttpResponse, ApiError> {
    if body.to == user.id {
        return Err(ApiError::Validation(vec![FieldError {
            field: "to".to_string(),
            message: "Cannot start a conversation with yourself".to_string(),
        }]));
    }

    let split = RoleSplit::from_caller(user.id, user.is_seller, body.to);
    let (conversation, created) = conversation_db::find_or_create(db.get_ref(), split).await?;

    if created {
        Ok(HttpResponse::Created().json(conversation))
    } else {
        Ok(HttpResponse::Ok().json(conversation))
    }
}

/// GET /api/conversations — the caller's threads, most recently active first.
pub async fn get_conversations(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let conversations =
        conversation_db::list_for_user(db.get_ref(), user.id, user.is_seller).await?;

    Ok(HttpResponse::Ok().json(conversations))
}

/// PUT /api/conversations/{id}/read — mark the caller's side as read.
pub async fn mark_conversation_read(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let conversation = conversation_db::get_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Conversation {id} not found")))?;

    if !conversation.has_participant(user.id) {
        return Err(ApiError::Forbidden(
            "You are not part of this conversation".to_string(),
        ));
    }

    let for_seller = conversation.seller_id == user.id;
    let updated = conversation_db::mark_read(db.get_ref(), conversation, for_seller).await?;

    Ok(HttpResponse::Ok().json(updated))
}
