use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `users` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    /// bcrypt hash, never serialized in responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_seller: bool,
    pub country: String,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::gigs::Entity")]
    Gigs,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
}

impl Related<super::gigs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gigs.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for POST /api/auth/register.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub country: String,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub is_seller: bool,
}

/// Request body for POST /api/auth/login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    pub username: String,
    pub password: String,
}

/// A safe user representation for API responses (never leaks the hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_seller: bool,
    pub country: String,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTimeUtc,
}

impl From<Model> for UserResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            email: m.email,
            is_seller: m.is_seller,
            country: m.country,
            phone: m.phone,
            description: m.description,
            image: m.image,
            created_at: m.created_at,
        }
    }
}

/// Minimal party projection joined onto gigs, orders, conversations, messages.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub image: Option<String>,
}

impl From<Model> for UserSummary {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            image: m.image,
        }
    }
}

impl From<&Model> for UserSummary {
    fn from(m: &Model) -> Self {
        Self {
            id: m.id,
            username: m.username.clone(),
            image: m.image.clone(),
        }
    }
}

/// Reviewer projection (adds country) joined onto reviews.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewerSummary {
    pub id: Uuid,
    pub username: String,
    pub image: Option<String>,
    pub country: String,
}

impl From<Model> for ReviewerSummary {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            image: m.image,
            country: m.country,
        }
    }
}

/// Seller profile projection shown on the gig detail page.
#[derive(Debug, Clone, Serialize)]
pub struct OwnerProfile {
    pub id: Uuid,
    pub username: String,
    pub image: Option<String>,
    pub country: String,
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
}

impl From<Model> for OwnerProfile {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            image: m.image,
            country: m.country,
            description: m.description,
            created_at: m.created_at,
        }
    }
}
