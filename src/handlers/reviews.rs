use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::gigs as gig_db;
use crate::db::reviews as review_db;
use crate::db::users as user_db;
use crate::error::ApiError;
use crate::models::reviews::{CreateReview, ReviewWithUser};
use crate::validation::validate_review;

/// POST /api/reviews — buyers only, at most one review per (gig, user).
///
/// The review insert and the gig's aggregate-counter bump happen in a single
/// transaction; on a duplicate the aggregates are left untouched.
pub async fn create_review(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateReview>,
) -> Result<HttpResponse, ApiError> {
    if user.is_seller {
        return Err(ApiError::Forbidden(
            "Only buyers can create reviews".to_string(),
        ));
    }

    let input = body.into_inner();
    validate_review(&input)?;

    let gig_id = input.gig_id;
    gig_db::get_gig_by_id(db.get_ref(), gig_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Gig {gig_id} not found")))?;

    if review_db::find_by_gig_and_user(db.get_ref(), gig_id, user.id)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(
            "You have already reviewed this gig".to_string(),
        ));
    }

    // A concurrent duplicate slipping past the check above still loses on
    // the unique (gig_id, user_id) index and maps to Conflict.
    let review = review_db::insert_review_with_aggregate(db.get_ref(), input, user.id).await?;

    let reviewer = user_db::get_user_by_id(db.get_ref(), user.id).await?;

    Ok(HttpResponse::Created().json(ReviewWithUser {
        review,
        user: reviewer.map(Into::into),
    }))
}

/// GET /api/reviews/{gig_id} — reviews for a gig, newest first (public).
pub async fn get_reviews(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let gig_id = path.into_inner();

    let reviews: Vec<ReviewWithUser> = review_db::list_for_gig(db.get_ref(), gig_id)
        .await?
        .into_iter()
        .map(|(review, reviewer)| ReviewWithUser {
            review,
            user: reviewer.map(Into::into),
        })
        .collect();

    Ok(HttpResponse::Ok().json(reviews))
}
