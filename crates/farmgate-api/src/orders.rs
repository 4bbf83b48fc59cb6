//! Order service.

use crate::envelope::unwrap_data;
use crate::ApiError;
use farmgate_commerce::checkout::{GatewayError, OrderGateway, OrderResult, OrderSubmission};
use farmgate_commerce::ids::OrderId;
use farmgate_commerce::money::{Currency, Money};
use farmgate_data::{FetchClient, Transport};
use serde::Deserialize;

/// Order record as the backend serves it.
#[derive(Debug, Deserialize)]
struct OrderDto {
    id: i64,
    #[serde(default)]
    invoice_number: Option<String>,
    total: f64,
}

impl OrderDto {
    fn into_result(self) -> OrderResult {
        OrderResult {
            reference: self
                .invoice_number
                .unwrap_or_else(|| self.id.to_string()),
            total: Money::from_decimal(self.total, Currency::EGP),
        }
    }
}

/// Typed access to the order endpoints.
///
/// Implements the checkout [`OrderGateway`], so the checkout flow submits
/// straight through this service.
pub struct OrdersService<T: Transport> {
    client: FetchClient<T>,
    bearer: Option<String>,
}

impl<T: Transport> OrdersService<T> {
    /// Create the service over a configured client.
    pub fn new(client: FetchClient<T>) -> Self {
        Self {
            client,
            bearer: None,
        }
    }

    /// Attach the session's bearer token to every order request.
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Place an order (`POST /orders`).
    pub fn create(&self, submission: &OrderSubmission) -> Result<OrderResult, ApiError> {
        tracing::debug!(items = submission.items.len(), "creating order");
        let mut request = self.client.post("/orders").json(submission)?;
        if let Some(token) = &self.bearer {
            request = request.bearer_auth(token);
        }
        let response = request.send()?;
        let dto: OrderDto = unwrap_data(response)?;
        Ok(dto.into_result())
    }

    /// Fetch an order (`GET /orders/{id}`).
    pub fn get(&self, id: OrderId) -> Result<OrderResult, ApiError> {
        let mut request = self.client.get(format!("/orders/{id}"));
        if let Some(token) = &self.bearer {
            request = request.bearer_auth(token);
        }
        let response = request.send()?;
        let dto: OrderDto = unwrap_data(response)?;
        Ok(dto.into_result())
    }
}

impl<T: Transport> OrderGateway for OrdersService<T> {
    fn create_order(&self, submission: &OrderSubmission) -> Result<OrderResult, GatewayError> {
        self.create(submission).map_err(GatewayError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedTransport;
    use crate::ApiConfig;
    use farmgate_commerce::checkout::{CustomerInfo, DeliveryAddress, OrderItem};
    use farmgate_commerce::ids::ProductId;
    use farmgate_data::Response;

    fn service(transport: ScriptedTransport) -> OrdersService<ScriptedTransport> {
        OrdersService::new(ApiConfig::new("https://api.test/api").client(transport))
    }

    fn submission() -> OrderSubmission {
        OrderSubmission {
            customer: CustomerInfo {
                name: "Omar Hassan".to_string(),
                phone: "01012345678".to_string(),
                address: DeliveryAddress {
                    city: "Cairo".to_string(),
                    street: "14 Orchard Road".to_string(),
                    building: "Building 3".to_string(),
                },
            },
            items: vec![OrderItem {
                product_id: ProductId::new(1),
                quantity: 2,
            }],
            notes: None,
        }
    }

    #[test]
    fn test_create_order() {
        let transport = ScriptedTransport::returning(Response::json_body(
            201,
            &serde_json::json!({
                "success": true,
                "data": {"id": 2045, "invoice_number": "INV-20260804-02045", "total": 110.0}
            }),
        ));
        let service = service(transport.clone());

        let result = service.create(&submission()).unwrap();
        assert_eq!(result.reference, "INV-20260804-02045");
        assert_eq!(result.total, Money::new(11000, Currency::EGP));

        let requests = transport.requests();
        assert_eq!(requests[0].url, "https://api.test/api/orders");
        let body: serde_json::Value =
            serde_json::from_slice(requests[0].body.as_ref().unwrap()).unwrap();
        assert_eq!(body["items"][0]["product_id"], 1);
        assert!(body["items"][0].get("price").is_none());
    }

    #[test]
    fn test_create_order_without_invoice_number_uses_id() {
        let transport = ScriptedTransport::returning(Response::json_body(
            201,
            &serde_json::json!({"success": true, "data": {"id": 2045, "total": 110.0}}),
        ));
        let result = service(transport).create(&submission()).unwrap();
        assert_eq!(result.reference, "2045");
    }

    #[test]
    fn test_bearer_token_attached() {
        let transport = ScriptedTransport::returning(Response::json_body(
            201,
            &serde_json::json!({"success": true, "data": {"id": 1, "total": 45.0}}),
        ));
        let service = service(transport.clone()).with_bearer("token-abc");

        service.create(&submission()).unwrap();
        let requests = transport.requests();
        assert_eq!(
            requests[0].headers.get("Authorization").map(String::as_str),
            Some("Bearer token-abc")
        );
    }

    #[test]
    fn test_validation_rejection_maps_to_gateway_error() {
        let transport = ScriptedTransport::returning(Response::json_body(
            422,
            &serde_json::json!({"message": "Phone already used"}),
        ));
        let service = service(transport);

        let error = service.create_order(&submission()).unwrap_err();
        assert_eq!(
            error,
            GatewayError::Rejected {
                status: 422,
                message: "Phone already used".to_string()
            }
        );
    }

    #[test]
    fn test_connectivity_failure_maps_to_network_error() {
        let transport = ScriptedTransport::failing("connection refused");
        let service = service(transport);

        let error = service.create_order(&submission()).unwrap_err();
        assert!(matches!(error, GatewayError::Network(_)));
    }
}
