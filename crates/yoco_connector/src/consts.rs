//! Connector constants

use payment_interfaces::enums::Currency;

/// Production endpoint of the Yoco checkout API
pub const BASE_URL: &str = "https://payments.yoco.com/api";

/// Yoco processes every checkout in rand
pub const GATEWAY_CURRENCY: Currency = Currency::Zar;

/// Fallback code when the gateway error body carries none
pub const NO_ERROR_CODE: &str = "no_error_code";

/// Fallback message when the gateway error body carries none
pub const NO_ERROR_MESSAGE: &str = "no_error_message";

/// Webhook event type reporting a successful payment
pub const WEBHOOK_PAYMENT_SUCCEEDED: &str = "payment.succeeded";

/// Idempotency key prefix for checkout creation
pub const INITIATE_KEY_PREFIX: &str = "init";

/// Idempotency key prefix for checkout re-creation on update
pub const UPDATE_KEY_PREFIX: &str = "upd";

/// Prefix of generated fallback session identifiers
pub const SESSION_ID_PREFIX: &str = "sess";

/// Header names used on gateway requests
pub mod headers {
    /// Deduplicates creating POSTs on the gateway side
    pub const IDEMPOTENCY_KEY: &str = "Idempotency-Key";
}
