use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::gigs as gig_db;
use crate::db::orders as order_db;
use crate::error::ApiError;
use crate::models::orders::{ConfirmOrder, PaymentIntentResponse};
use crate::payments::{StripeClient, amount_in_cents};

/// POST /api/orders/create-payment-intent/{gig_id} — initiate a purchase.
///
/// Order of operations matters: the gig is loaded first, so a missing gig
/// never creates a payment intent; the order row is only written after the
/// intent exists, so an intent failure never leaves an orphan pending order.
pub async fn create_payment_intent(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    stripe: web::Data<StripeClient>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let gig_id = path.into_inner();

    let gig = gig_db::get_gig_by_id(db.get_ref(), gig_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Gig {gig_id} not found")))?;

    let intent = stripe
        .create_payment_intent(amount_in_cents(gig.price))
        .await?;

    let order = order_db::insert_order(db.get_ref(), &gig, user.id, intent.id).await?;

    Ok(HttpResponse::Ok().json(PaymentIntentResponse {
        client_secret: intent.client_secret,
        order_id: order.id,
    }))
}

/// PUT /api/orders — mark an order complete after the payment redirect.
///
/// No caller identity check: the unguessable, unique payment reference is
/// the trust boundary. Re-confirming the same reference is a no-op.
pub async fn confirm_order(
    db: web::Data<DatabaseConnection>,
    body: web::Json<ConfirmOrder>,
) -> Result<HttpResponse, ApiError> {
    let order = order_db::complete_by_payment_intent(db.get_ref(), &body.payment_intent)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound("No order matches this payment reference".to_string())
        })?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Order confirmed successfully",
        "order": order,
    })))
}

/// GET /api/orders — completed orders for the caller's role, newest first.
pub async fn get_orders(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let orders =
        order_db::list_completed_for_user(db.get_ref(), user.id, user.is_seller).await?;

    Ok(HttpResponse::Ok().json(orders))
}
