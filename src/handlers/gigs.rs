use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::gigs as gig_db;
use crate::db::reviews as review_db;
use crate::error::ApiError;
use crate::models::gigs::{CreateGig, GigDetail, GigListQuery, GigWithOwner};
use crate::models::reviews::ReviewWithUser;
use crate::validation::validate_gig;

/// GET /api/gigs — filtered listing joined with owner projections (public).
pub async fn get_gigs(
    db: web::Data<DatabaseConnection>,
    query: web::Query<GigListQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    let rows = gig_db::list_gigs(db.get_ref(), &query).await?;

    let gigs: Vec<GigWithOwner> = rows
        .into_iter()
        .map(|(gig, owner)| GigWithOwner {
            gig,
            user: owner.map(Into::into),
        })
        .collect();

    Ok(HttpResponse::Ok().json(gigs))
}

/// GET /api/gigs/{id} — gig detail with owner profile and reviews (public).
pub async fn get_gig(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let (gig, owner) = gig_db::get_gig_with_owner(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Gig {id} not found")))?;

    let reviews: Vec<ReviewWithUser> = review_db::list_for_gig(db.get_ref(), id)
        .await?
        .into_iter()
        .map(|(review, reviewer)| ReviewWithUser {
            review,
            user: reviewer.map(Into::into),
        })
        .collect();

    Ok(HttpResponse::Ok().json(GigDetail {
        gig,
        user: owner.map(Into::into),
        reviews,
    }))
}

/// POST /api/gigs — create a gig; sellers only, owner is always the caller.
pub async fn create_gig(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateGig>,
) -> Result<HttpResponse, ApiError> {
    if !user.is_seller {
        return Err(ApiError::Forbidden("Only sellers can create gigs".to_string()));
    }

    let input = body.into_inner();
    validate_gig(&input)?;

    let gig = gig_db::insert_gig(db.get_ref(), input, user.id).await?;

    Ok(HttpResponse::Created().json(gig))
}

/// DELETE /api/gigs/{id} — only the owning seller may delete.
pub async fn delete_gig(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let gig = gig_db::get_gig_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Gig {id} not found")))?;

    if gig.user_id != user.id {
        return Err(ApiError::Forbidden(
            "You can only delete your own gigs".to_string(),
        ));
    }

    gig_db::delete_gig(db.get_ref(), id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Gig deleted successfully",
    })))
}
