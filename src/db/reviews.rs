use sea_orm::sea_query::Expr;
use sea_orm::*;
use uuid::Uuid;

use crate::db::flatten_txn_err;
use crate::models::gigs;
use crate::models::reviews::{self, CreateReview};
use crate::models::users;

/// Look up an existing review by the (gig, user) pair.
pub async fn find_by_gig_and_user(
    db: &DatabaseConnection,
    gig_id: Uuid,
    user_id: Uuid,
) -> Result<Option<reviews::Model>, DbErr> {
    reviews::Entity::find()
        .filter(reviews::Column::GigId.eq(gig_id))
        .filter(reviews::Column::UserId.eq(user_id))
        .one(db)
        .await
}

/// Insert a review and bump the gig's aggregate counters in one transaction.
///
/// total_stars += star, star_number += 1. If either write fails the whole
/// transaction rolls back, so the aggregates never drift from the rows.
pub async fn insert_review_with_aggregate(
    db: &DatabaseConnection,
    input: CreateReview,
    user_id: Uuid,
) -> Result<reviews::Model, DbErr> {
    let star_delta = i32::from(input.star);

    db.transaction::<_, reviews::Model, DbErr>(move |txn| {
        Box::pin(async move {
            let review = reviews::ActiveModel {
                id: Set(Uuid::new_v4()),
                gig_id: Set(input.gig_id),
                user_id: Set(user_id),
                star: Set(input.star),
                desc: Set(input.desc),
                created_at: Set(chrono::Utc::now()),
            }
            .insert(txn)
            .await?;

            gigs::Entity::update_many()
                .col_expr(
                    gigs::Column::TotalStars,
                    Expr::col(gigs::Column::TotalStars).add(star_delta),
                )
                .col_expr(
                    gigs::Column::StarNumber,
                    Expr::col(gigs::Column::StarNumber).add(1),
                )
                .filter(gigs::Column::Id.eq(review.gig_id))
                .exec(txn)
                .await?;

            Ok(review)
        })
    })
    .await
    .map_err(flatten_txn_err)
}

/// Reviews for a gig, newest first, with reviewer projections.
pub async fn list_for_gig(
    db: &DatabaseConnection,
    gig_id: Uuid,
) -> Result<Vec<(reviews::Model, Option<users::Model>)>, DbErr> {
    reviews::Entity::find()
        .filter(reviews::Column::GigId.eq(gig_id))
        .order_by_desc(reviews::Column::CreatedAt)
        .find_also_related(users::Entity)
        .all(db)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn review_insert_bumps_gig_aggregates_in_one_transaction() {
        let gig_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let stored = reviews::Model {
            id: Uuid::new_v4(),
            gig_id,
            user_id,
            star: 4,
            desc: "Great work, delivered on time".to_owned(),
            created_at: chrono::Utc::now(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[stored.clone()]])
            .append_exec_results([MockExecResult {
                rows_affected: 1,
                ..Default::default()
            }])
            .into_connection();

        let input = CreateReview {
            gig_id,
            star: 4,
            desc: "Great work, delivered on time".to_owned(),
        };
        let inserted = insert_review_with_aggregate(&db, input, user_id)
            .await
            .unwrap();
        assert_eq!(inserted, stored);

        // The counter update runs in the same transaction as the insert and
        // moves the aggregates by exactly (star, 1).
        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("total_stars"));
        assert!(log.contains("star_number"));
        assert!(log.contains("Int(Some(4))"));
        assert!(log.contains("Int(Some(1))"));
    }

    #[tokio::test]
    async fn failed_counter_update_rolls_the_insert_back() {
        let gig_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let stored = reviews::Model {
            id: Uuid::new_v4(),
            gig_id,
            user_id,
            star: 5,
            desc: "Flawless delivery, would hire again".to_owned(),
            created_at: chrono::Utc::now(),
        };

        // The insert succeeds but the aggregate update errors out.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[stored]])
            .append_exec_errors([DbErr::Custom("update failed".to_owned())])
            .into_connection();

        let input = CreateReview {
            gig_id,
            star: 5,
            desc: "Flawless delivery, would hire again".to_owned(),
        };
        let result = insert_review_with_aggregate(&db, input, user_id).await;
        assert!(result.is_err());

        // The transaction ends in a rollback, not a commit.
        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("ROLLBACK"));
        assert!(!log.contains("COMMIT"));
    }
}
