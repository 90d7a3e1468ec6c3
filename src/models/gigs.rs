use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `gigs` table.
///
/// `total_stars` / `star_number` are the aggregate-rating counters maintained
/// inside the same transaction as each review insert.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gigs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub short_title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub short_desc: String,
    pub category: String,
    pub price: i32,
    pub delivery_time: i32,
    pub revision_number: i32,
    /// Ordered list of feature strings, stored as JSONB.
    #[sea_orm(column_type = "JsonBinary")]
    pub features: Json,
    pub cover: String,
    /// Additional image URLs, stored as JSONB.
    #[sea_orm(column_type = "JsonBinary")]
    pub images: Json,
    pub total_stars: i32,
    pub star_number: i32,
    pub sales: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for POST /api/gigs. The owner is always the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGig {
    pub title: String,
    pub description: String,
    pub short_title: String,
    pub short_desc: String,
    pub category: String,
    pub price: i32,
    pub delivery_time: i32,
    pub revision_number: i32,
    pub features: Vec<String>,
    pub cover: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Query parameters for GET /api/gigs. Keys are the wire names the
/// storefront sends (`userId`, `cat`, `search`, `min`, `max`, `sort`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GigListQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<Uuid>,
    pub cat: Option<String>,
    pub search: Option<String>,
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub sort: Option<String>,
}

/// Descending sort key for gig listings. Unknown keys fall back to `CreatedAt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GigSortKey {
    CreatedAt,
    Sales,
    Price,
}

impl GigSortKey {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("sales") => GigSortKey::Sales,
            Some("price") => GigSortKey::Price,
            _ => GigSortKey::CreatedAt,
        }
    }

    pub fn column(self) -> Column {
        match self {
            GigSortKey::CreatedAt => Column::CreatedAt,
            GigSortKey::Sales => Column::Sales,
            GigSortKey::Price => Column::Price,
        }
    }
}

/// Listing row: gig joined with its owner's minimal projection.
#[derive(Debug, Clone, Serialize)]
pub struct GigWithOwner {
    #[serde(flatten)]
    pub gig: Model,
    pub user: Option<super::users::UserSummary>,
}

/// Detail view: gig + owner profile + reviews (newest first).
#[derive(Debug, Clone, Serialize)]
pub struct GigDetail {
    #[serde(flatten)]
    pub gig: Model,
    pub user: Option<super::users::OwnerProfile>,
    pub reviews: Vec<super::reviews::ReviewWithUser>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Query;

    #[test]
    fn list_query_parses_camel_case_user_id() {
        let id = Uuid::new_v4();
        let query = Query::<GigListQuery>::from_query(&format!("userId={id}")).unwrap();
        assert_eq!(query.user_id, Some(id));
    }

    #[test]
    fn list_query_parses_all_wire_params() {
        let id = Uuid::new_v4();
        let raw = format!("userId={id}&cat=design&search=logo&min=10&max=100&sort=sales");
        let query = Query::<GigListQuery>::from_query(&raw).unwrap();
        assert_eq!(query.user_id, Some(id));
        assert_eq!(query.cat.as_deref(), Some("design"));
        assert_eq!(query.search.as_deref(), Some("logo"));
        assert_eq!(query.min, Some(10));
        assert_eq!(query.max, Some(100));
        assert_eq!(GigSortKey::parse(query.sort.as_deref()), GigSortKey::Sales);
    }

    #[test]
    fn sort_key_parses_known_values() {
        assert_eq!(GigSortKey::parse(Some("sales")), GigSortKey::Sales);
        assert_eq!(GigSortKey::parse(Some("price")), GigSortKey::Price);
        assert_eq!(GigSortKey::parse(Some("createdAt")), GigSortKey::CreatedAt);
    }

    #[test]
    fn sort_key_falls_back_to_created_at() {
        assert_eq!(GigSortKey::parse(None), GigSortKey::CreatedAt);
        assert_eq!(GigSortKey::parse(Some("bogus")), GigSortKey::CreatedAt);
        assert_eq!(GigSortKey::parse(Some("")), GigSortKey::CreatedAt);
    }
}
