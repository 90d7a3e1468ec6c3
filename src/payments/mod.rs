//! Stripe payment-intent client.
//!
//! Talks to the Stripe REST API directly over `reqwest` with form-encoded
//! bodies. Only the payment-intent create call is needed: confirmation is
//! redirect-driven on the client side and reaches us via PUT /api/orders.

use serde::Deserialize;
use thiserror::Error;

use crate::error::ApiError;

const STRIPE_API_BASE: &str = "https://api.stripe.com";

#[derive(Debug, Error)]
pub enum StripeError {
    #[error("payment provider request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("payment provider rejected the request: {0}")]
    Api(String),
}

impl From<StripeError> for ApiError {
    fn from(err: StripeError) -> Self {
        tracing::error!(error = %err, "stripe error");
        ApiError::Upstream
    }
}

/// A created payment intent: the provider reference plus the client secret
/// the browser needs to complete the charge.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorEnvelope {
    error: StripeErrorBody,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    message: Option<String>,
}

pub struct StripeClient {
    http: reqwest::Client,
    secret_key: String,
}

impl StripeClient {
    pub fn new(secret_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key,
        }
    }

    /// Create a payment intent for the given amount in minor currency units.
    pub async fn create_payment_intent(
        &self,
        amount_cents: i64,
    ) -> Result<PaymentIntent, StripeError> {
        let amount = amount_cents.to_string();
        let params = [
            ("amount", amount.as_str()),
            ("currency", "usd"),
            ("automatic_payment_methods[enabled]", "true"),
        ];

        let response = self
            .http
            .post(format!("{STRIPE_API_BASE}/v1/payment_intents"))
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<StripeErrorEnvelope>()
                .await
                .ok()
                .and_then(|e| e.error.message)
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(StripeError::Api(message));
        }

        Ok(response.json::<PaymentIntent>().await?)
    }
}

/// Convert a gig price in whole currency units to minor units for the
/// payment provider.
pub fn amount_in_cents(price: i32) -> i64 {
    i64::from(price) * 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_converts_to_minor_units() {
        assert_eq!(amount_in_cents(5), 500);
        assert_eq!(amount_in_cents(50), 5000);
        assert_eq!(amount_in_cents(0), 0);
    }

    #[test]
    fn large_price_does_not_overflow() {
        assert_eq!(amount_in_cents(i32::MAX), i64::from(i32::MAX) * 100);
    }

    #[test]
    fn payment_intent_decodes_from_stripe_shape() {
        let body = r#"{
            "id": "pi_3MtwBwLkdIwHu7ix28a3tqPa",
            "object": "payment_intent",
            "amount": 5000,
            "client_secret": "pi_3MtwBwLkdIwHu7ix28a3tqPa_secret_YrKJUKribcBjcG8HVhfZluoGH"
        }"#;
        let intent: PaymentIntent = serde_json::from_str(body).unwrap();
        assert_eq!(intent.id, "pi_3MtwBwLkdIwHu7ix28a3tqPa");
        assert!(intent.client_secret.starts_with("pi_"));
    }

    #[test]
    fn error_envelope_decodes_message() {
        let body = r#"{"error": {"type": "invalid_request_error", "message": "Amount must be at least 50 cents"}}"#;
        let envelope: StripeErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(
            envelope.error.message.as_deref(),
            Some("Amount must be at least 50 cents")
        );
    }
}
