use sea_orm::*;
use uuid::Uuid;

use crate::db::flatten_txn_err;
use crate::models::conversations;
use crate::models::messages;
use crate::models::users;

/// Insert a message and update the parent conversation in one transaction.
///
/// The conversation's last_message/updated_at are refreshed and the read
/// flags flip to sender-read / recipient-unread atomically with the insert.
pub async fn append_message(
    db: &DatabaseConnection,
    conversation: conversations::Model,
    sender_id: Uuid,
    sender_is_seller: bool,
    desc: String,
) -> Result<messages::Model, DbErr> {
    db.transaction::<_, messages::Model, DbErr>(move |txn| {
        Box::pin(async move {
            let message = messages::ActiveModel {
                id: Set(Uuid::new_v4()),
                conversation_id: Set(conversation.id),
                user_id: Set(sender_id),
                desc: Set(desc),
                created_at: Set(chrono::Utc::now()),
            }
            .insert(txn)
            .await?;

            let mut active: conversations::ActiveModel = conversation.into();
            active.last_message = Set(Some(message.desc.clone()));
            active.read_by_seller = Set(sender_is_seller);
            active.read_by_buyer = Set(!sender_is_seller);
            active.updated_at = Set(chrono::Utc::now());
            active.update(txn).await?;

            Ok(message)
        })
    })
    .await
    .map_err(flatten_txn_err)
}

/// Messages in a conversation, ascending by time, with sender projections.
pub async fn list_for_conversation(
    db: &DatabaseConnection,
    conversation_id: Uuid,
) -> Result<Vec<(messages::Model, Option<users::Model>)>, DbErr> {
    messages::Entity::find()
        .filter(messages::Column::ConversationId.eq(conversation_id))
        .order_by_asc(messages::Column::CreatedAt)
        .find_also_related(users::Entity)
        .all(db)
        .await
}
