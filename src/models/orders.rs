use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `orders` table.
///
/// Title, price and image are snapshots of the gig at purchase time.
/// `payment_intent` is the external provider's reference and is unique;
/// order confirmation is keyed on it alone.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub gig_id: Uuid,
    pub buyer_id: Uuid,
    pub seller_id: Uuid,
    pub title: String,
    pub price: i32,
    pub image: Option<String>,
    #[sea_orm(unique)]
    pub payment_intent: String,
    pub is_completed: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::gigs::Entity",
        from = "Column::GigId",
        to = "super::gigs::Column::Id"
    )]
    Gig,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::BuyerId",
        to = "super::users::Column::Id"
    )]
    Buyer,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::SellerId",
        to = "super::users::Column::Id"
    )]
    Seller,
}

impl Related<super::gigs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gig.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for PUT /api/orders (redirect-driven confirmation).
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmOrder {
    #[serde(rename = "paymentIntent")]
    pub payment_intent: String,
}

/// Response for POST /api/orders/create-payment-intent/{gig_id}.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
    #[serde(rename = "orderId")]
    pub order_id: Uuid,
}

/// Gig snapshot joined onto order listings.
#[derive(Debug, Clone, Serialize)]
pub struct GigSnapshot {
    pub title: String,
    pub cover: String,
}

/// Order listing row with gig snapshot and both parties.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithParties {
    #[serde(flatten)]
    pub order: Model,
    pub gig: Option<GigSnapshot>,
    pub buyer: Option<super::users::UserSummary>,
    pub seller: Option<super::users::UserSummary>,
}
