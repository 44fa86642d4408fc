//! Yoco checkout provider
//!
//! Implements the framework's [`PaymentProvider`] contract on top of the
//! Yoco Online Checkout REST API. Payments are represented gateway-side as
//! checkouts: a checkout is created on initiation, re-created on amount
//! updates (the gateway has no update-in-place call), polled for its
//! lifecycle status, and refunded through a dedicated endpoint. Capture and
//! cancellation have no gateway call of their own in this flow; completion
//! and expiry of the checkout imply them.

pub mod consts;
pub mod transformers;

use error_stack::{Report, ResultExt};
use masking::{PeekInterface, Secret};
use payment_interfaces::{
    api::PaymentProvider,
    enums::PaymentStatus,
    errors::{CustomResult, PaymentProviderError},
    generate_id_with_default_len,
    types::{
        AuthorizePaymentOutput, FloatMajorUnit, InitiatePaymentInput, InitiatePaymentOutput,
        MinorUnit, PaymentData, UpdatePaymentInput, UpdatePaymentOutput,
    },
    webhooks::{WebhookActionAndData, WebhookEvent},
};
use serde::de::DeserializeOwned;
use time::OffsetDateTime;
use transformers as yoco;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Method {
    Get,
    Post,
}

/// Options bundle the framework passes when constructing the provider.
#[derive(Clone, Debug)]
pub struct YocoConfig {
    /// Yoco secret key, sent as the bearer token on every request
    pub secret_key: Secret<String>,
    /// Where the gateway redirects the customer after a successful checkout
    pub success_url: Option<String>,
    /// Where the gateway redirects the customer after an abandoned checkout
    pub cancel_url: Option<String>,
    /// Gateway endpoint override, e.g. for a sandbox
    pub base_url: Option<String>,
}

impl YocoConfig {
    fn validate(&self) -> Result<(), PaymentProviderError> {
        let mut invalid_fields = Vec::new();
        if self.secret_key.peek().trim().is_empty() {
            invalid_fields.push("secret_key is required".to_string());
        }
        for (field_name, value) in [
            ("success_url", &self.success_url),
            ("cancel_url", &self.cancel_url),
            ("base_url", &self.base_url),
        ] {
            if let Some(value) = value {
                if url::Url::parse(value).is_err() {
                    invalid_fields.push(format!("{field_name} is not a valid URL"));
                }
            }
        }
        if invalid_fields.is_empty() {
            Ok(())
        } else {
            Err(PaymentProviderError::InvalidConfiguration {
                message: invalid_fields.join(", "),
            })
        }
    }
}

/// The Yoco checkout provider. Holds the validated configuration and a
/// shared HTTP client; no other state survives between calls.
#[derive(Clone, Debug)]
pub struct Yoco {
    config: YocoConfig,
    http_client: reqwest::Client,
}

impl Yoco {
    /// Validates the configuration and builds the provider. Every invalid
    /// field is reported in one aggregated error.
    pub fn new(config: YocoConfig) -> CustomResult<Self, PaymentProviderError> {
        config.validate()?;
        Ok(Self {
            http_client: reqwest::Client::new(),
            config,
        })
    }

    fn base_url(&self) -> &str {
        self.config
            .base_url
            .as_deref()
            .unwrap_or(consts::BASE_URL)
    }

    /// Issues a single request to the gateway and parses the JSON response.
    /// The idempotency key is attached only on POST requests that supply
    /// one. One attempt per call; there is no retry or timeout handling.
    async fn call_gateway<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        idempotency_key: Option<&str>,
    ) -> CustomResult<T, PaymentProviderError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        let mut request = match method {
            Method::Get => self.http_client.get(&url),
            Method::Post => self.http_client.post(&url),
        }
        .bearer_auth(self.config.secret_key.peek());

        if method == Method::Post {
            if let Some(key) = idempotency_key {
                request = request.header(consts::headers::IDEMPOTENCY_KEY, key);
            }
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        tracing::info!(?method, path, "sending gateway request");

        let response = request
            .send()
            .await
            .change_context(PaymentProviderError::Network)
            .attach_printable("unable to send request to the gateway")?;

        let status_code = response.status().as_u16();
        let response_body = response
            .bytes()
            .await
            .change_context(PaymentProviderError::Network)
            .attach_printable("unable to read the gateway response body")?;

        if !(200..300).contains(&status_code) {
            return Err(self.build_error_response(status_code, &response_body));
        }

        serde_json::from_slice(&response_body)
            .change_context(PaymentProviderError::Network)
            .attach_printable("gateway returned a non-JSON body")
    }

    fn build_error_response(&self, status_code: u16, body: &[u8]) -> Report<PaymentProviderError> {
        let response: yoco::YocoErrorResponse = match serde_json::from_slice(body) {
            Ok(response) => response,
            Err(error) => {
                return Report::new(error)
                    .change_context(PaymentProviderError::Network)
                    .attach_printable("gateway error body is not valid JSON")
            }
        };

        tracing::info!(gateway_response = ?response, status_code, "gateway returned an error");

        Report::new(PaymentProviderError::Gateway {
            status_code,
            code: response
                .error_code
                .unwrap_or_else(|| consts::NO_ERROR_CODE.to_string()),
            message: response
                .error_message
                .or(response.error_type)
                .unwrap_or_else(|| consts::NO_ERROR_MESSAGE.to_string()),
        })
    }

    async fn create_checkout(
        &self,
        amount: MinorUnit,
        session_id: &str,
        idempotency_key: &str,
    ) -> CustomResult<yoco::YocoCheckoutResponse, PaymentProviderError> {
        let request = yoco::YocoCheckoutRequest::from((amount, session_id, &self.config));
        let body = serde_json::to_value(&request)
            .change_context(PaymentProviderError::RequestEncodingFailed)?;
        self.call_gateway(Method::Post, "/checkouts", Some(body), Some(idempotency_key))
            .await
    }

    async fn fetch_checkout(
        &self,
        checkout_id: &str,
    ) -> CustomResult<yoco::YocoCheckoutResponse, PaymentProviderError> {
        self.call_gateway(Method::Get, &format!("/checkouts/{checkout_id}"), None, None)
            .await
    }
}

#[async_trait::async_trait]
impl PaymentProvider for Yoco {
    async fn initiate_payment(
        &self,
        input: InitiatePaymentInput,
    ) -> CustomResult<InitiatePaymentOutput, PaymentProviderError> {
        let session_id = yoco::resolve_initiate_session_id(&input.context);
        let amount = input.amount.to_minor_unit()?;
        let idempotency_key = generate_id_with_default_len(consts::INITIATE_KEY_PREFIX);

        let checkout = match self
            .create_checkout(amount, &session_id, &idempotency_key)
            .await
        {
            Ok(checkout) => checkout,
            Err(error) => {
                tracing::error!(?error, %session_id, "checkout creation failed");
                return Err(error);
            }
        };

        Ok(InitiatePaymentOutput {
            status: PaymentStatus::Pending,
            data: PaymentData {
                checkout_id: Some(checkout.id),
                session_id: Some(session_id),
                redirect_url: checkout.redirect_url,
                ..Default::default()
            },
        })
    }

    async fn update_payment(
        &self,
        input: UpdatePaymentInput,
    ) -> CustomResult<UpdatePaymentOutput, PaymentProviderError> {
        let UpdatePaymentInput {
            amount,
            context,
            mut data,
            ..
        } = input;
        let session_id = yoco::resolve_update_session_id(&context, &data);
        let amount = amount.to_minor_unit()?;
        let idempotency_key = generate_id_with_default_len(consts::UPDATE_KEY_PREFIX);

        // No update-in-place endpoint; a new checkout supersedes the old one.
        let checkout = self
            .create_checkout(amount, &session_id, &idempotency_key)
            .await
            .attach_printable("failed to update the Yoco checkout")?;

        data.checkout_id = Some(checkout.id);
        data.session_id = Some(session_id);
        data.redirect_url = checkout.redirect_url;
        Ok(UpdatePaymentOutput { data })
    }

    async fn delete_payment(
        &self,
        data: PaymentData,
    ) -> CustomResult<PaymentData, PaymentProviderError> {
        // Checkouts cannot be deleted gateway-side; unfinished ones expire.
        Ok(data)
    }

    async fn get_payment_status(
        &self,
        data: &PaymentData,
    ) -> CustomResult<PaymentStatus, PaymentProviderError> {
        let Some(checkout_id) = data.checkout_id.as_deref() else {
            return Ok(PaymentStatus::Pending);
        };
        match self.fetch_checkout(checkout_id).await {
            Ok(checkout) => Ok(checkout.status.into()),
            Err(error) => {
                tracing::warn!(?error, %checkout_id, "could not read checkout status, reporting pending");
                Ok(PaymentStatus::Pending)
            }
        }
    }

    async fn authorize_payment(
        &self,
        mut data: PaymentData,
    ) -> CustomResult<AuthorizePaymentOutput, PaymentProviderError> {
        let Some(checkout_id) = data.checkout_id.clone() else {
            return Ok(AuthorizePaymentOutput {
                status: PaymentStatus::Pending,
                data,
            });
        };
        match self.fetch_checkout(&checkout_id).await {
            Ok(checkout) => {
                if checkout.payment_id.is_some() {
                    data.payment_id = checkout.payment_id;
                }
                Ok(AuthorizePaymentOutput {
                    status: checkout.status.into(),
                    data,
                })
            }
            Err(error) => {
                tracing::warn!(?error, %checkout_id, "could not read checkout for authorization, reporting pending");
                Ok(AuthorizePaymentOutput {
                    status: PaymentStatus::Pending,
                    data,
                })
            }
        }
    }

    async fn capture_payment(
        &self,
        mut data: PaymentData,
    ) -> CustomResult<PaymentData, PaymentProviderError> {
        // Capture is implied by checkout completion; only record when.
        data.captured_at = Some(OffsetDateTime::now_utc());
        Ok(data)
    }

    async fn refund_payment(
        &self,
        mut data: PaymentData,
        amount: Option<FloatMajorUnit>,
    ) -> CustomResult<PaymentData, PaymentProviderError> {
        let checkout_id =
            data.checkout_id
                .clone()
                .ok_or(PaymentProviderError::MissingRequiredField {
                    field_name: "checkout_id",
                })?;
        let request = yoco::YocoRefundRequest {
            amount: amount.map(FloatMajorUnit::to_minor_unit).transpose()?,
        };
        let body = serde_json::to_value(&request)
            .change_context(PaymentProviderError::RequestEncodingFailed)?;

        let refund: yoco::YocoRefundResponse = self
            .call_gateway(
                Method::Post,
                &format!("/checkouts/{checkout_id}/refund"),
                Some(body),
                None,
            )
            .await?;

        data.refund_id = Some(refund.refund_id);
        Ok(data)
    }

    async fn cancel_payment(
        &self,
        mut data: PaymentData,
    ) -> CustomResult<PaymentData, PaymentProviderError> {
        // Cancellation is implied by checkout expiry; only record when.
        data.cancelled_at = Some(OffsetDateTime::now_utc());
        Ok(data)
    }

    async fn retrieve_payment(
        &self,
        mut data: PaymentData,
    ) -> CustomResult<PaymentData, PaymentProviderError> {
        let Some(checkout_id) = data.checkout_id.clone() else {
            return Ok(data);
        };
        let checkout = self.fetch_checkout(&checkout_id).await?;
        if checkout.payment_id.is_some() {
            data.payment_id = checkout.payment_id;
        }
        if checkout.redirect_url.is_some() {
            data.redirect_url = checkout.redirect_url;
        }
        Ok(data)
    }

    async fn get_webhook_action_and_data(
        &self,
        event: WebhookEvent,
    ) -> CustomResult<WebhookActionAndData, PaymentProviderError> {
        Ok(yoco::get_webhook_action_and_data(&event))
    }
}
