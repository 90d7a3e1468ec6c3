use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `conversations` table.
///
/// One conversation per (seller_id, buyer_id) pair, enforced by a unique
/// index; creation uses find-or-create semantics.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "conversations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub seller_id: Uuid,
    pub buyer_id: Uuid,
    #[sea_orm(column_type = "Text", nullable)]
    pub last_message: Option<String>,
    pub read_by_seller: bool,
    pub read_by_buyer: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::messages::Entity")]
    Messages,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::SellerId",
        to = "super::users::Column::Id"
    )]
    Seller,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::BuyerId",
        to = "super::users::Column::Id"
    )]
    Buyer,
}

impl Related<super::messages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Messages.def()
    }
}

impl Model {
    /// Whether the given user sits on either side of this conversation.
    pub fn has_participant(&self, user_id: Uuid) -> bool {
        self.seller_id == user_id || self.buyer_id == user_id
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for POST /api/conversations: the counterpart user id.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateConversation {
    pub to: Uuid,
}

/// Seller/buyer role split computed from the caller's side.
///
/// The creator's read flag starts true, the counterpart's false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSplit {
    pub seller_id: Uuid,
    pub buyer_id: Uuid,
    pub read_by_seller: bool,
    pub read_by_buyer: bool,
}

impl RoleSplit {
    pub fn from_caller(caller_id: Uuid, caller_is_seller: bool, other: Uuid) -> Self {
        if caller_is_seller {
            Self {
                seller_id: caller_id,
                buyer_id: other,
                read_by_seller: true,
                read_by_buyer: false,
            }
        } else {
            Self {
                seller_id: other,
                buyer_id: caller_id,
                read_by_seller: false,
                read_by_buyer: true,
            }
        }
    }
}

/// Conversation joined with both party projections.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationWithParties {
    #[serde(flatten)]
    pub conversation: Model,
    pub seller: Option<super::users::UserSummary>,
    pub buyer: Option<super::users::UserSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn seller_caller_takes_seller_side() {
        let seller = Uuid::new_v4();
        let buyer = Uuid::new_v4();
        let split = RoleSplit::from_caller(seller, true, buyer);
        assert_eq!(split.seller_id, seller);
        assert_eq!(split.buyer_id, buyer);
        assert!(split.read_by_seller);
        assert!(!split.read_by_buyer);
    }

    #[test]
    fn buyer_caller_takes_buyer_side() {
        let seller = Uuid::new_v4();
        let buyer = Uuid::new_v4();
        let split = RoleSplit::from_caller(buyer, false, seller);
        assert_eq!(split.seller_id, seller);
        assert_eq!(split.buyer_id, buyer);
        assert!(!split.read_by_seller);
        assert!(split.read_by_buyer);
    }
}
