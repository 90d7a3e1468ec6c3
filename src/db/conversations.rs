use sea_orm::*;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::conversations::{self, ConversationWithParties, RoleSplit};
use crate::models::users::{self, UserSummary};

/// Look up the conversation for a (seller, buyer) pair.
pub async fn find_by_pair(
    db: &DatabaseConnection,
    seller_id: Uuid,
    buyer_id: Uuid,
) -> Result<Option<conversations::Model>, DbErr> {
    conversations::Entity::find()
        .filter(conversations::Column::SellerId.eq(seller_id))
        .filter(conversations::Column::BuyerId.eq(buyer_id))
        .one(db)
        .await
}

/// Return the existing conversation for the pair or create a new one.
///
/// The bool is true when a row was created. A lost race on the unique
/// (seller_id, buyer_id) index falls back to the winner's row.
pub async fn find_or_create(
    db: &DatabaseConnection,
    split: RoleSplit,
) -> Result<(conversations::Model, bool), DbErr> {
    if let Some(existing) = find_by_pair(db, split.seller_id, split.buyer_id).await? {
        return Ok((existing, false));
    }

    let now = chrono::Utc::now();
    let new_conversation = conversations::ActiveModel {
        id: Set(Uuid::new_v4()),
        seller_id: Set(split.seller_id),
        buyer_id: Set(split.buyer_id),
        last_message: Set(None),
        read_by_seller: Set(split.read_by_seller),
        read_by_buyer: Set(split.read_by_buyer),
        created_at: Set(now),
        updated_at: Set(now),
    };

    match new_conversation.insert(db).await {
        Ok(created) => Ok((created, true)),
        Err(err) => {
            if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                if let Some(existing) =
                    find_by_pair(db, split.seller_id, split.buyer_id).await?
                {
                    return Ok((existing, false));
                }
            }
            Err(err)
        }
    }
}

/// Fetch a single conversation by ID.
pub async fn get_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<conversations::Model>, DbErr> {
    conversations::Entity::find_by_id(id).one(db).await
}

/// Conversations for a user's role side, most recently active first,
/// with both party projections.
pub async fn list_for_user(
    db: &DatabaseConnection,
    user_id: Uuid,
    is_seller: bool,
) -> Result<Vec<ConversationWithParties>, DbErr> {
    let role_column = if is_seller {
        conversations::Column::SellerId
    } else {
        conversations::Column::BuyerId
    };

    let rows = conversations::Entity::find()
        .filter(role_column.eq(user_id))
        .order_by_desc(conversations::Column::UpdatedAt)
        .all(db)
        .await?;

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let user_ids: Vec<Uuid> = rows
        .iter()
        .flat_map(|c| [c.seller_id, c.buyer_id])
        .collect();

    let user_map: HashMap<Uuid, users::Model> = users::Entity::find()
        .filter(users::Column::Id.is_in(user_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();

    Ok(rows
        .into_iter()
        .map(|conversation| {
            let seller = user_map.get(&conversation.seller_id).map(UserSummary::from);
            let buyer = user_map.get(&conversation.buyer_id).map(UserSummary::from);
            ConversationWithParties {
                conversation,
                seller,
                buyer,
            }
        })
        .collect())
}

/// Flip the read flag for one side of a conversation.
pub async fn mark_read(
    db: &DatabaseConnection,
    conversation: conversations::Model,
    for_seller: bool,
) -> Result<conversations::Model, DbErr> {
    let mut active: conversations::ActiveModel = conversation.into();
    if for_seller {
        active.read_by_seller = Set(true);
    } else {
        active.read_by_buyer = Set(true);
    }

    active.update(db).await
}
