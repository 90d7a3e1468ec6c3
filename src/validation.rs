//! Field-level validators for request payloads.
//!
//! Each validator collects every failing field instead of bailing on the
//! first one, so the caller can render all inline errors in a single pass.

use crate::error::{ApiError, FieldError};
use crate::models::gigs::CreateGig;
use crate::models::messages::CreateMessage;
use crate::models::reviews::CreateReview;
use crate::models::users::RegisterUser;

/// Accumulates field errors during a validation pass.
#[derive(Debug, Default)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    /// Consume the result, turning collected errors into an `ApiError`.
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self.errors))
        }
    }
}

/// Minimal structural email check: non-empty local part and a dotted domain.
fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

pub fn validate_register(input: &RegisterUser) -> Result<(), ApiError> {
    let mut result = ValidationResult::new();

    if input.username.trim().chars().count() < 3 {
        result.add_error("username", "Username must be at least 3 characters");
    }
    if !is_valid_email(&input.email) {
        result.add_error("email", "Invalid email address");
    }
    if input.password.chars().count() < 6 {
        result.add_error("password", "Password must be at least 6 characters");
    }
    if input.country.trim().is_empty() {
        result.add_error("country", "Country is required");
    }

    result.into_result()
}

pub fn validate_gig(input: &CreateGig) -> Result<(), ApiError> {
    let mut result = ValidationResult::new();

    if input.title.trim().chars().count() < 10 {
        result.add_error("title", "Title must be at least 10 characters");
    }
    if input.description.trim().chars().count() < 50 {
        result.add_error("description", "Description must be at least 50 characters");
    }
    if input.short_title.trim().chars().count() < 5 {
        result.add_error("short_title", "Short title must be at least 5 characters");
    }
    if input.short_desc.trim().chars().count() < 20 {
        result.add_error(
            "short_desc",
            "Short description must be at least 20 characters",
        );
    }
    if input.category.trim().is_empty() {
        result.add_error("category", "Category is required");
    }
    if input.price < 5 {
        result.add_error("price", "Price must be at least $5");
    }
    if input.delivery_time < 1 {
        result.add_error("delivery_time", "Delivery time must be at least 1 day");
    }
    if input.revision_number < 0 {
        result.add_error("revision_number", "Revision number cannot be negative");
    }
    if input.features.is_empty() {
        result.add_error("features", "At least one feature is required");
    }
    if input.cover.trim().is_empty() {
        result.add_error("cover", "Cover image is required");
    }

    result.into_result()
}

pub fn validate_review(input: &CreateReview) -> Result<(), ApiError> {
    let mut result = ValidationResult::new();

    if !(1..=5).contains(&input.star) {
        result.add_error("star", "Rating must be between 1 and 5");
    }
    if input.desc.trim().chars().count() < 10 {
        result.add_error("desc", "Review must be at least 10 characters");
    }

    result.into_result()
}

pub fn validate_message(input: &CreateMessage) -> Result<(), ApiError> {
    let mut result = ValidationResult::new();

    if input.desc.trim().is_empty() {
        result.add_error("desc", "Message cannot be empty");
    }

    result.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn valid_gig() -> CreateGig {
        CreateGig {
            title: "I will design a modern logo".to_string(),
            description: "A long and thorough description of the service, \
                          well past the fifty character minimum."
                .to_string(),
            short_title: "Logo design".to_string(),
            short_desc: "Modern logo design for your brand".to_string(),
            category: "design".to_string(),
            price: 50,
            delivery_time: 3,
            revision_number: 2,
            features: vec!["Source file".to_string()],
            cover: "https://img.example.com/cover.png".to_string(),
            images: vec![],
        }
    }

    #[test]
    fn valid_gig_passes() {
        assert!(validate_gig(&valid_gig()).is_ok());
    }

    #[test]
    fn gig_validation_collects_every_failing_field() {
        let gig = CreateGig {
            title: "short".to_string(),
            description: "too short".to_string(),
            short_title: "abc".to_string(),
            short_desc: "tiny".to_string(),
            category: "".to_string(),
            price: 4,
            delivery_time: 0,
            revision_number: -1,
            features: vec![],
            cover: "".to_string(),
            images: vec![],
        };

        let Err(ApiError::Validation(errors)) = validate_gig(&gig) else {
            panic!("expected a validation error");
        };
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "title",
                "description",
                "short_title",
                "short_desc",
                "category",
                "price",
                "delivery_time",
                "revision_number",
                "features",
                "cover",
            ]
        );
    }

    #[test]
    fn minimum_lengths_count_characters_not_bytes() {
        // Nine accented characters is 18 bytes; still under the 10-char minimum.
        let mut gig = valid_gig();
        gig.title = "ééééééééé".to_string();
        assert_eq!(gig.title.len(), 18);

        let Err(ApiError::Validation(errors)) = validate_gig(&gig) else {
            panic!("expected a validation error");
        };
        assert_eq!(errors[0].field, "title");

        // Ten accented characters meets it.
        gig.title = "éééééééééé".to_string();
        assert!(validate_gig(&gig).is_ok());
    }

    #[test]
    fn gig_boundary_values_pass() {
        let mut gig = valid_gig();
        gig.price = 5;
        gig.delivery_time = 1;
        gig.revision_number = 0;
        assert!(validate_gig(&gig).is_ok());
    }

    #[test]
    fn review_star_bounds() {
        let mut review = CreateReview {
            gig_id: Uuid::new_v4(),
            star: 1,
            desc: "Great work, delivered on time".to_string(),
        };
        assert!(validate_review(&review).is_ok());

        review.star = 5;
        assert!(validate_review(&review).is_ok());

        review.star = 0;
        assert!(validate_review(&review).is_err());

        review.star = 6;
        assert!(validate_review(&review).is_err());
    }

    #[test]
    fn review_desc_minimum_length() {
        let review = CreateReview {
            gig_id: Uuid::new_v4(),
            star: 4,
            desc: "too short".to_string(),
        };
        let Err(ApiError::Validation(errors)) = validate_review(&review) else {
            panic!("expected a validation error");
        };
        assert_eq!(errors[0].field, "desc");
    }

    #[test]
    fn register_rejects_bad_email_and_short_password() {
        let input = RegisterUser {
            username: "bob".to_string(),
            email: "not-an-email".to_string(),
            password: "12345".to_string(),
            country: "South Africa".to_string(),
            phone: None,
            description: None,
            image: None,
            is_seller: false,
        };
        let Err(ApiError::Validation(errors)) = validate_register(&input) else {
            panic!("expected a validation error");
        };
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "password"]);
    }

    #[test]
    fn register_accepts_valid_input() {
        let input = RegisterUser {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "Password123".to_string(),
            country: "South Africa".to_string(),
            phone: Some("+27123456789".to_string()),
            description: None,
            image: None,
            is_seller: true,
        };
        assert!(validate_register(&input).is_ok());
    }

    #[test]
    fn empty_message_is_rejected() {
        let msg = CreateMessage {
            conversation_id: Uuid::new_v4(),
            desc: "   ".to_string(),
        };
        assert!(validate_message(&msg).is_err());
    }
}
