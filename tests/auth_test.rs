///! Integration test for session JWT issuance and validation.
///!
///! Mints tokens with the same HS256 secret the server would use, then
///! validates them through the library functions. No running server or
///! database is needed.
///!
///! Run with: `cargo test --test auth_test`
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

use gigmarket_backend::auth::jwt::{Claims, mint_token, validate_token};

/// A fake secret for testing — never use the real one in tests committed to git.
const TEST_SECRET: &str = "test-secret-at-least-256-bits-long-for-hs256-xxxxxxx";

#[test]
fn test_minted_token_round_trips() {
    let user_id = Uuid::new_v4();
    let token = mint_token(user_id, "alice", true, TEST_SECRET).expect("Failed to mint token");

    let claims = validate_token(&token, TEST_SECRET).expect("Token should be valid");

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.username, "alice");
    assert!(claims.is_seller);
}

#[test]
fn test_buyer_token_carries_seller_flag_false() {
    let user_id = Uuid::new_v4();
    let token = mint_token(user_id, "bob", false, TEST_SECRET).unwrap();

    let claims = validate_token(&token, TEST_SECRET).unwrap();
    assert!(!claims.is_seller);
}

#[test]
fn test_expired_token_is_rejected() {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        username: "expired".to_string(),
        is_seller: false,
        exp: now - 300, // expired 5 minutes ago (well past the 60s default leeway)
        iat: now - 3600,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let result = validate_token(&token, TEST_SECRET);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("ExpiredSignature"));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let token = mint_token(Uuid::new_v4(), "mallory", false, TEST_SECRET).unwrap();

    let result = validate_token(&token, "completely-wrong-secret-xxxxxxxxxxxxxxxxxxx");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("InvalidSignature"));
}

#[test]
fn test_garbage_token_is_rejected() {
    let result = validate_token("not.a.valid.jwt", TEST_SECRET);
    assert!(result.is_err());
}

#[test]
fn test_non_uuid_sub_is_rejected_by_user_id() {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: "not-a-uuid".to_string(),
        username: "odd".to_string(),
        is_seller: false,
        exp: now + 3600,
        iat: now,
    };

    assert!(claims.user_id().is_err());
}
