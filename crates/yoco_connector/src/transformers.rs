use payment_interfaces::{
    enums::{Currency, PaymentStatus, WebhookAction},
    generate_id_with_default_len,
    types::{MinorUnit, PaymentContext, PaymentData},
    webhooks::{WebhookActionAndData, WebhookData, WebhookEvent},
};
use serde::{Deserialize, Serialize};

use crate::{consts, YocoConfig};

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YocoCheckoutRequest {
    pub amount: MinorUnit,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    pub metadata: YocoCheckoutMetadata,
    pub external_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YocoCheckoutMetadata {
    pub session_id: String,
}

impl From<(MinorUnit, &str, &YocoConfig)> for YocoCheckoutRequest {
    fn from((amount, session_id, config): (MinorUnit, &str, &YocoConfig)) -> Self {
        Self {
            amount,
            currency: consts::GATEWAY_CURRENCY,
            success_url: config.success_url.clone(),
            cancel_url: config.cancel_url.clone(),
            metadata: YocoCheckoutMetadata {
                session_id: session_id.to_owned(),
            },
            external_id: session_id.to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum YocoCheckoutStatus {
    Created,
    Started,
    Processing,
    Completed,
    Cancelled,
    Expired,
    #[serde(other)]
    Unknown,
}

impl From<YocoCheckoutStatus> for PaymentStatus {
    fn from(item: YocoCheckoutStatus) -> Self {
        match item {
            YocoCheckoutStatus::Completed => Self::Authorized,
            YocoCheckoutStatus::Cancelled | YocoCheckoutStatus::Expired => Self::Canceled,
            YocoCheckoutStatus::Created
            | YocoCheckoutStatus::Started
            | YocoCheckoutStatus::Processing
            | YocoCheckoutStatus::Unknown => Self::Pending,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YocoCheckoutResponse {
    pub id: String,
    pub status: YocoCheckoutStatus,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub payment_id: Option<String>,
}

#[derive(Debug, Default, Serialize, PartialEq)]
pub struct YocoRefundRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<MinorUnit>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YocoRefundResponse {
    pub refund_id: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YocoErrorResponse {
    #[serde(default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Picks the identifier that correlates this payment across calls.
///
/// Priority on initiation: explicit idempotency key, then cart id, then the
/// generic reference id, then the customer id, then a generated token. The
/// host populates different fields depending on the call site.
pub fn resolve_initiate_session_id(context: &PaymentContext) -> String {
    context
        .idempotency_key
        .clone()
        .or_else(|| context.cart_id.clone())
        .or_else(|| context.reference_id.clone())
        .or_else(|| context.customer.as_ref().and_then(|customer| customer.id.clone()))
        .unwrap_or_else(|| generate_id_with_default_len(consts::SESSION_ID_PREFIX))
}

/// Priority on update: the resource id of the call, then cart id, then
/// whatever session identifier was persisted on initiation.
pub fn resolve_update_session_id(context: &PaymentContext, data: &PaymentData) -> String {
    context
        .resource_id
        .clone()
        .or_else(|| context.cart_id.clone())
        .or_else(|| data.session_id.clone())
        .unwrap_or_else(|| generate_id_with_default_len(consts::SESSION_ID_PREFIX))
}

/// Translates a delivered gateway event into the framework's webhook action
/// vocabulary. Only successful payments map to an action; everything else is
/// reported as not supported and ignored by the host.
pub fn get_webhook_action_and_data(event: &WebhookEvent) -> WebhookActionAndData {
    if event.event_type != consts::WEBHOOK_PAYMENT_SUCCEEDED {
        return WebhookActionAndData {
            action: WebhookAction::NotSupported,
            data: None,
        };
    }

    let session_id = event
        .payload
        .metadata
        .as_ref()
        .and_then(|metadata| metadata.session_id.clone())
        .or_else(|| event.payload.external_id.clone());

    WebhookActionAndData {
        action: WebhookAction::Authorized,
        data: Some(WebhookData {
            session_id,
            amount: event.payload.amount,
        }),
    }
}

#[cfg(test)]
mod tests {
    use masking::Secret;
    use payment_interfaces::{types::CustomerDetails, webhooks::WebhookPayload};
    use serde_json::json;

    use super::*;

    fn test_config() -> YocoConfig {
        YocoConfig {
            secret_key: Secret::new("sk_test_abc".to_string()),
            success_url: Some("https://shop.example.com/success".to_string()),
            cancel_url: None,
            base_url: None,
        }
    }

    fn context_with(
        idempotency_key: Option<&str>,
        cart_id: Option<&str>,
        reference_id: Option<&str>,
        customer_id: Option<&str>,
    ) -> PaymentContext {
        PaymentContext {
            idempotency_key: idempotency_key.map(str::to_owned),
            cart_id: cart_id.map(str::to_owned),
            reference_id: reference_id.map(str::to_owned),
            resource_id: None,
            customer: customer_id.map(|id| CustomerDetails {
                id: Some(id.to_owned()),
                email: None,
            }),
        }
    }

    #[test]
    fn initiate_session_id_prefers_idempotency_key() {
        let context = context_with(Some("key-1"), Some("cart-1"), Some("ref-1"), Some("cus-1"));
        assert_eq!(resolve_initiate_session_id(&context), "key-1");
    }

    #[test]
    fn initiate_session_id_falls_back_to_cart_id() {
        let context = context_with(None, Some("cart-1"), Some("ref-1"), Some("cus-1"));
        assert_eq!(resolve_initiate_session_id(&context), "cart-1");
    }

    #[test]
    fn initiate_session_id_falls_back_to_reference_id() {
        let context = context_with(None, None, Some("ref-1"), Some("cus-1"));
        assert_eq!(resolve_initiate_session_id(&context), "ref-1");
    }

    #[test]
    fn initiate_session_id_falls_back_to_customer_id() {
        let context = context_with(None, None, None, Some("cus-1"));
        assert_eq!(resolve_initiate_session_id(&context), "cus-1");
    }

    #[test]
    fn initiate_session_id_generates_token_when_nothing_is_present() {
        let context = context_with(None, None, None, None);
        let session_id = resolve_initiate_session_id(&context);
        assert!(session_id.starts_with("sess-"));
        assert_ne!(session_id, resolve_initiate_session_id(&context));
    }

    #[test]
    fn update_session_id_prefers_resource_id() {
        let context = PaymentContext {
            resource_id: Some("res-1".to_string()),
            cart_id: Some("cart-1".to_string()),
            ..Default::default()
        };
        let data = PaymentData {
            session_id: Some("sess-stored".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_update_session_id(&context, &data), "res-1");
    }

    #[test]
    fn update_session_id_falls_back_to_cart_id_then_stored_session() {
        let data = PaymentData {
            session_id: Some("sess-stored".to_string()),
            ..Default::default()
        };
        let context = PaymentContext {
            cart_id: Some("cart-1".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_update_session_id(&context, &data), "cart-1");
        assert_eq!(
            resolve_update_session_id(&PaymentContext::default(), &data),
            "sess-stored"
        );
    }

    #[test]
    fn status_mapping_is_total() {
        assert_eq!(
            PaymentStatus::from(YocoCheckoutStatus::Completed),
            PaymentStatus::Authorized
        );
        assert_eq!(
            PaymentStatus::from(YocoCheckoutStatus::Cancelled),
            PaymentStatus::Canceled
        );
        assert_eq!(
            PaymentStatus::from(YocoCheckoutStatus::Expired),
            PaymentStatus::Canceled
        );
        assert_eq!(
            PaymentStatus::from(YocoCheckoutStatus::Processing),
            PaymentStatus::Pending
        );
    }

    #[test]
    fn unrecognized_gateway_status_maps_to_pending() {
        let status: YocoCheckoutStatus =
            serde_json::from_value(json!("some_future_status")).unwrap();
        assert_eq!(status, YocoCheckoutStatus::Unknown);
        assert_eq!(PaymentStatus::from(status), PaymentStatus::Pending);
    }

    #[test]
    fn checkout_request_serializes_camel_case() {
        let request =
            YocoCheckoutRequest::from((MinorUnit::new(1234), "sess-abc", &test_config()));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "amount": 1234,
                "currency": "ZAR",
                "successUrl": "https://shop.example.com/success",
                "metadata": { "sessionId": "sess-abc" },
                "externalId": "sess-abc",
            })
        );
    }

    #[test]
    fn checkout_response_deserializes_gateway_shape() {
        let response: YocoCheckoutResponse = serde_json::from_value(json!({
            "id": "ch_nW9El2OTJKovBwmwwaAjLnGK",
            "status": "completed",
            "redirectUrl": "https://c.yoco.com/checkout/ch_nW9El2OTJKovBwmwwaAjLnGK",
            "paymentId": "p_mN0A3lGJNQvmwQWyNrAjLnGK",
            "amount": 1234,
            "currency": "ZAR"
        }))
        .unwrap();
        assert_eq!(response.status, YocoCheckoutStatus::Completed);
        assert_eq!(
            response.payment_id.as_deref(),
            Some("p_mN0A3lGJNQvmwQWyNrAjLnGK")
        );
    }

    #[test]
    fn error_response_deserializes_gateway_shape() {
        let response: YocoErrorResponse = serde_json::from_value(json!({
            "errorType": "invalid_request_error",
            "errorCode": "checkout_expired",
            "errorMessage": "The checkout has expired"
        }))
        .unwrap();
        assert_eq!(response.error_code.as_deref(), Some("checkout_expired"));
    }

    #[test]
    fn successful_payment_webhook_resolves_to_authorized() {
        let event = WebhookEvent {
            event_type: "payment.succeeded".to_string(),
            payload: WebhookPayload {
                metadata: serde_json::from_value(json!({ "sessionId": "sess-abc" })).ok(),
                external_id: None,
                amount: Some(MinorUnit::new(1234)),
            },
        };
        let resolved = get_webhook_action_and_data(&event);
        assert_eq!(resolved.action, WebhookAction::Authorized);
        assert_eq!(
            resolved.data,
            Some(WebhookData {
                session_id: Some("sess-abc".to_string()),
                amount: Some(MinorUnit::new(1234)),
            })
        );
    }

    #[test]
    fn webhook_session_id_falls_back_to_external_reference() {
        let event = WebhookEvent {
            event_type: "payment.succeeded".to_string(),
            payload: WebhookPayload {
                metadata: None,
                external_id: Some("sess-ext".to_string()),
                amount: None,
            },
        };
        let resolved = get_webhook_action_and_data(&event);
        assert_eq!(
            resolved.data.and_then(|data| data.session_id).as_deref(),
            Some("sess-ext")
        );
    }

    #[test]
    fn other_webhook_events_are_not_supported() {
        let event = WebhookEvent {
            event_type: "refund.failed".to_string(),
            payload: WebhookPayload::default(),
        };
        let resolved = get_webhook_action_and_data(&event);
        assert_eq!(resolved.action, WebhookAction::NotSupported);
        assert!(resolved.data.is_none());
    }
}
