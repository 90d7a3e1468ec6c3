use sea_orm::sea_query::{Expr, Func};
use sea_orm::*;
use uuid::Uuid;

use crate::models::gigs::{self, CreateGig, GigListQuery, GigSortKey};
use crate::models::users;

/// Insert a new gig owned by `user_id`, with zeroed aggregates.
pub async fn insert_gig(
    db: &DatabaseConnection,
    input: CreateGig,
    user_id: Uuid,
) -> Result<gigs::Model, DbErr> {
    let new_gig = gigs::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        title: Set(input.title),
        short_title: Set(input.short_title),
        description: Set(input.description),
        short_desc: Set(input.short_desc),
        category: Set(input.category),
        price: Set(input.price),
        delivery_time: Set(input.delivery_time),
        revision_number: Set(input.revision_number),
        features: Set(serde_json::json!(input.features)),
        cover: Set(input.cover),
        images: Set(serde_json::json!(input.images)),
        total_stars: Set(0),
        star_number: Set(0),
        sales: Set(0),
        created_at: Set(chrono::Utc::now()),
    };

    new_gig.insert(db).await
}

/// Fetch gigs matching the listing filters, joined with their owners,
/// descending by the chosen sort key. No pagination by design.
pub async fn list_gigs(
    db: &DatabaseConnection,
    query: &GigListQuery,
) -> Result<Vec<(gigs::Model, Option<users::Model>)>, DbErr> {
    let mut find = gigs::Entity::find();

    if let Some(user_id) = query.user_id {
        find = find.filter(gigs::Column::UserId.eq(user_id));
    }
    if let Some(cat) = &query.cat {
        // case-insensitive exact match
        find = find.filter(
            Expr::expr(Func::lower(Expr::col(gigs::Column::Category))).eq(cat.to_lowercase()),
        );
    }
    if let Some(search) = &query.search {
        let pattern = format!("%{}%", escape_like(&search.to_lowercase()));
        find = find.filter(Expr::expr(Func::lower(Expr::col(gigs::Column::Title))).like(pattern));
    }
    if let Some(min) = query.min {
        find = find.filter(gigs::Column::Price.gte(min));
    }
    if let Some(max) = query.max {
        find = find.filter(gigs::Column::Price.lte(max));
    }

    let sort = GigSortKey::parse(query.sort.as_deref());

    find.order_by_desc(sort.column())
        .find_also_related(users::Entity)
        .all(db)
        .await
}

/// Escape LIKE wildcards so user-supplied search text matches literally.
fn escape_like(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Fetch a single gig by ID.
pub async fn get_gig_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<gigs::Model>, DbErr> {
    gigs::Entity::find_by_id(id).one(db).await
}

/// Fetch a single gig with its owner.
pub async fn get_gig_with_owner(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<(gigs::Model, Option<users::Model>)>, DbErr> {
    gigs::Entity::find_by_id(id)
        .find_also_related(users::Entity)
        .one(db)
        .await
}

/// Delete a gig by ID. Ownership is checked by the handler.
pub async fn delete_gig(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    gigs::Entity::delete_by_id(id).exec(db).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("snake_case"), "snake\\_case");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn plain_search_text_is_untouched() {
        assert_eq!(escape_like("logo design"), "logo design");
    }
}
