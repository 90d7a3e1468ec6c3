use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::conversations as conversation_db;
use crate::db::messages as message_db;
use crate::db::users as user_db;
use crate::error::ApiError;
use crate::models::messages::{CreateMessage, MessageWithSender};
use crate::validation::validate_message;

/// POST /api/messages — append a message to a conversation.
///
/// The insert and the parent conversation's lastMessage/read-flag update
/// run in one transaction. Only participants may post.
pub async fn create_message(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateMessage>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    validate_message(&input)?;

    let conversation_id = input.conversation_id;
    let conversation = conversation_db::get_by_id(db.get_ref(), conversation_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Conversation {conversation_id} not found")))?;

    if !conversation.has_participant(user.id) {
        return Err(ApiError::Forbidden(
            "You are not part of this conversation".to_string(),
        ));
    }

    let sender_is_seller = conversation.seller_id == user.id;
    let message =
        message_db::append_message(db.get_ref(), conversation, user.id, sender_is_seller, input.desc)
            .await?;

    let sender = user_db::get_user_by_id(db.get_ref(), user.id).await?;

    Ok(HttpResponse::Created().json(MessageWithSender {
        message,
        user: sender.map(Into::into),
    }))
}

/// GET /api/messages/{conversation_id} — messages ascending by time.
pub async fn get_messages(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let conversation_id = path.into_inner();

    let conversation = conversation_db::get_by_id(db.get_ref(), conversation_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Conversation {conversation_id} not found")))?;

    if !conversation.has_participant(user.id) {
        return Err(ApiError::Forbidden(
            "You are not part of this conversation".to_string(),
        ));
    }

    let messages: Vec<MessageWithSender> =
        message_db::list_for_conversation(db.get_ref(), conversation_id)
            .await?
            .into_iter()
            .map(|(message, sender)| MessageWithSender {
                message,
                user: sender.map(Into::into),
            })
            .collect();

    Ok(HttpResponse::Ok().json(messages))
}
