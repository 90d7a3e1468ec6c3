use sea_orm::*;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::gigs;
use crate::models::orders::{self, GigSnapshot, OrderWithParties};
use crate::models::users::{self, UserSummary};

/// Persist a pending order for a gig, snapshotting title/price/cover.
///
/// Called only after the payment intent exists; a failure here leaves the
/// provider holding an intent with no local record (documented, unreconciled).
pub async fn insert_order(
    db: &DatabaseConnection,
    gig: &gigs::Model,
    buyer_id: Uuid,
    payment_intent: String,
) -> Result<orders::Model, DbErr> {
    let new_order = orders::ActiveModel {
        id: Set(Uuid::new_v4()),
        gig_id: Set(gig.id),
        buyer_id: Set(buyer_id),
        seller_id: Set(gig.user_id),
        title: Set(gig.title.clone()),
        price: Set(gig.price),
        image: Set(Some(gig.cover.clone())),
        payment_intent: Set(payment_intent),
        is_completed: Set(false),
        created_at: Set(chrono::Utc::now()),
    };

    new_order.insert(db).await
}

/// Flip the order matching a payment reference to completed.
///
/// Idempotent: an already-completed order is returned unchanged, so
/// re-confirming with the same reference never toggles the flag back.
pub async fn complete_by_payment_intent(
    db: &DatabaseConnection,
    payment_intent: &str,
) -> Result<Option<orders::Model>, DbErr> {
    let Some(order) = orders::Entity::find()
        .filter(orders::Column::PaymentIntent.eq(payment_intent))
        .one(db)
        .await?
    else {
        return Ok(None);
    };

    if order.is_completed {
        return Ok(Some(order));
    }

    let mut active: orders::ActiveModel = order.into();
    active.is_completed = Set(true);
    Ok(Some(active.update(db).await?))
}

/// Completed orders for a user, newest first, with gig snapshot and both
/// party projections. Sellers see orders they sold, buyers orders they bought.
pub async fn list_completed_for_user(
    db: &DatabaseConnection,
    user_id: Uuid,
    is_seller: bool,
) -> Result<Vec<OrderWithParties>, DbErr> {
    let role_column = if is_seller {
        orders::Column::SellerId
    } else {
        orders::Column::BuyerId
    };

    let rows = orders::Entity::find()
        .filter(role_column.eq(user_id))
        .filter(orders::Column::IsCompleted.eq(true))
        .order_by_desc(orders::Column::CreatedAt)
        .all(db)
        .await?;

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let gig_ids: Vec<Uuid> = rows.iter().map(|o| o.gig_id).collect();
    let user_ids: Vec<Uuid> = rows
        .iter()
        .flat_map(|o| [o.buyer_id, o.seller_id])
        .collect();

    let gig_map: HashMap<Uuid, gigs::Model> = gigs::Entity::find()
        .filter(gigs::Column::Id.is_in(gig_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|g| (g.id, g))
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
        .map(|order| {
            let gig = gig_map.get(&order.gig_id).map(|g| GigSnapshot {
                title: g.title.clone(),
                cover: g.cover.clone(),
            });
            let buyer = user_map.get(&order.buyer_id).map(UserSummary::from);
            let seller = user_map.get(&order.seller_id).map(UserSummary::from);
            OrderWithParties {
                order,
                gig,
                buyer,
                seller,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_order() -> orders::Model {
        orders::Model {
            id: Uuid::new_v4(),
            gig_id: Uuid::new_v4(),
            buyer_id: Uuid::new_v4(),
            seller_id: Uuid::new_v4(),
            title: "I will design a modern logo".to_owned(),
            price: 50,
            image: None,
            payment_intent: "pi_123".to_owned(),
            is_completed: true,
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn reconfirming_a_completed_order_returns_it_unchanged() {
        let order = completed_order();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[order.clone()]])
            .into_connection();

        let found = complete_by_payment_intent(&db, "pi_123")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, order);

        // Only the lookup ran; nothing was written.
        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let rendered = format!("{log:?}");
        assert!(rendered.contains("SELECT"));
        assert!(!rendered.contains("UPDATE"));
    }

    #[tokio::test]
    async fn pending_order_is_flipped_to_completed() {
        let mut order = completed_order();
        order.is_completed = false;
        let mut updated = order.clone();
        updated.is_completed = true;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[order], [updated]])
            .into_connection();

        let found = complete_by_payment_intent(&db, "pi_123")
            .await
            .unwrap()
            .unwrap();
        assert!(found.is_completed);
    }

    #[tokio::test]
    async fn unknown_payment_reference_yields_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<orders::Model>::new()])
            .into_connection();

        let found = complete_by_payment_intent(&db, "pi_missing").await.unwrap();
        assert!(found.is_none());
    }
}
