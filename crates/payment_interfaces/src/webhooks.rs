//! Webhook shapes delivered by payment gateways and the resolution the
//! framework expects back from providers.

use serde::{Deserialize, Serialize};

use crate::{enums::WebhookAction, types::MinorUnit};

/// A single webhook delivery, as forwarded by the framework. The framework
/// owns transport, signature verification and redelivery; providers only
/// interpret the event.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Gateway event type, e.g. `payment.succeeded`
    #[serde(rename = "type")]
    pub event_type: String,
    /// Event payload
    pub payload: WebhookPayload,
}

/// Payload of a webhook event.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    /// Metadata the provider attached to the checkout at creation time
    #[serde(default)]
    pub metadata: Option<WebhookMetadata>,
    /// External reference the provider attached to the checkout
    #[serde(default)]
    pub external_id: Option<String>,
    /// Amount of the payment the event refers to, in minor units
    #[serde(default)]
    pub amount: Option<MinorUnit>,
}

/// Checkout metadata echoed back inside webhook payloads.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookMetadata {
    /// The session identifier the provider stored at checkout creation
    #[serde(default)]
    pub session_id: Option<String>,
    /// Remaining metadata entries
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// What the framework should do with a webhook event, plus the data needed
/// to do it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WebhookActionAndData {
    /// Action to take
    pub action: WebhookAction,
    /// Session correlation data, present when the action targets a session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<WebhookData>,
}

/// Session correlation data resolved from a webhook event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookData {
    /// Identifier of the host payment session the event refers to
    pub session_id: Option<String>,
    /// Amount reported by the event, in minor units
    pub amount: Option<MinorUnit>,
}
