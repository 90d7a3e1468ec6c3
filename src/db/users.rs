use sea_orm::*;
use uuid::Uuid;

use crate::models::users::{self, RegisterUser};

/// Insert a new user with an already-hashed password.
pub async fn insert_user(
    db: &DatabaseConnection,
    input: RegisterUser,
    password_hash: String,
) -> Result<users::Model, DbErr> {
    let new_user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(input.username),
        email: Set(input.email),
        password_hash: Set(password_hash),
        is_seller: Set(input.is_seller),
        country: Set(input.country),
        phone: Set(input.phone),
        description: Set(input.description),
        image: Set(input.image),
        created_at: Set(chrono::Utc::now()),
    };

    new_user.insert(db).await
}

/// Fetch a single user by ID.
pub async fn get_user_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}

/// Fetch a user by their unique username (login lookup).
pub async fn find_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(db)
        .await
}

/// Fetch a user by their unique email.
pub async fn find_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(db)
        .await
}
