use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    LoginRequest, LoginResponse, NewOrderType, Order, OrderFilters, OrderPayload, OrderType, OrderTypeQuery,
    OrderTypeUpdate, PaginationParams, Restaurant,
};

use crate::services::config::ConsoleConfig;
use crate::services::storage::auth_token;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteMethod {
    Post,
    Patch,
    Delete,
}

/// A write request, fully built before anything goes over the wire
#[derive(Debug, Clone, PartialEq)]
struct WriteCall {
    method: WriteMethod,
    path: String,
    /// JSON text
    body: Option<String>,
}

impl WriteCall {
    fn with_body<T: Serialize>(method: WriteMethod, path: String, body: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self { method, path, body: Some(body) })
    }

    fn login(request: &LoginRequest) -> Result<Self, ApiError> {
        Self::with_body(WriteMethod::Post, "/authentications/login".to_string(), request)
    }

    fn create_order(payload: &OrderPayload) -> Result<Self, ApiError> {
        Self::with_body(WriteMethod::Post, "/orders".to_string(), payload)
    }

    fn update_order(order_id: i64, payload: &OrderPayload) -> Result<Self, ApiError> {
        Self::with_body(WriteMethod::Patch, format!("/orders/{}", order_id), payload)
    }

    fn create_order_type(body: &NewOrderType) -> Result<Self, ApiError> {
        Self::with_body(WriteMethod::Post, "/order-types".to_string(), body)
    }

    fn update_order_type(order_type_id: i64, update: &OrderTypeUpdate) -> Result<Self, ApiError> {
        Self::with_body(WriteMethod::Patch, format!("/order-types/{}", order_type_id), update)
    }

    fn delete_order_type(order_type_id: i64) -> Self {
        Self {
            method: WriteMethod::Delete,
            path: format!("/order-types/{}", order_type_id),
            body: None,
        }
    }
}

/// API client for the order management backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client pointed at the configured backend
    pub fn new() -> Self {
        Self::with_base_url(ConsoleConfig::default().api_base())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let body = self.send_write(WriteCall::login(request)?).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Orders for one restaurant, narrowed by the list filters
    pub async fn get_orders(&self, restaurant_id: i64, filters: &OrderFilters) -> Result<Vec<Order>, ApiError> {
        let request = self.get("/orders").query(filters.to_query(restaurant_id));
        self.fetch_list(request).await
    }

    pub async fn create_order(&self, payload: &OrderPayload) -> Result<(), ApiError> {
        self.send_write(WriteCall::create_order(payload)?).await.map(|_| ())
    }

    pub async fn update_order(&self, order_id: i64, payload: &OrderPayload) -> Result<(), ApiError> {
        self.send_write(WriteCall::update_order(order_id, payload)?).await.map(|_| ())
    }

    pub async fn get_order_types(&self, restaurant_id: i64, query: &OrderTypeQuery) -> Result<Vec<OrderType>, ApiError> {
        let request = self.get("/order-types").query(query.to_query(restaurant_id));
        self.fetch_list(request).await
    }

    pub async fn create_order_type(&self, body: &NewOrderType) -> Result<(), ApiError> {
        self.send_write(WriteCall::create_order_type(body)?).await.map(|_| ())
    }

    pub async fn update_order_type(&self, order_type_id: i64, update: &OrderTypeUpdate) -> Result<(), ApiError> {
        self.send_write(WriteCall::update_order_type(order_type_id, update)?).await.map(|_| ())
    }

    pub async fn delete_order_type(&self, order_type_id: i64) -> Result<(), ApiError> {
        self.send_write(WriteCall::delete_order_type(order_type_id)).await.map(|_| ())
    }

    pub async fn get_restaurants(&self, params: &PaginationParams) -> Result<Vec<Restaurant>, ApiError> {
        let request = self.get("/restaurants").query(params.to_query());
        self.fetch_list(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        with_auth(Request::get(&self.url(path)))
    }

    /// Send a list request. A body that is valid JSON but not an array counts as empty.
    async fn fetch_list<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Vec<T>, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body = ensure_ok(response).await?;
        parse_list(&body)
    }

    /// Send a write call and return the response body text
    async fn send_write(&self, call: WriteCall) -> Result<String, ApiError> {
        let url = self.url(&call.path);
        let builder = with_auth(match call.method {
            WriteMethod::Post => Request::post(&url),
            WriteMethod::Patch => Request::patch(&url),
            WriteMethod::Delete => Request::delete(&url),
        });

        let response = match call.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        ensure_ok(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn with_auth(request: RequestBuilder) -> RequestBuilder {
    match auth_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

async fn ensure_ok(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    if response.ok() {
        Ok(body)
    } else {
        Err(ApiError::Status { status, body })
    }
}

fn parse_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !value.is_array() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_of_restaurants() {
        let body = r#"[{"id": 1, "name": "Ak Saray", "slug": "ak-saray"}, {"id": 2, "name": "Berkarar"}]"#;
        let restaurants: Vec<Restaurant> = parse_list(body).unwrap();
        assert_eq!(restaurants.len(), 2);
        assert_eq!(restaurants[1].name, "Berkarar");
    }

    #[test]
    fn test_non_array_body_is_empty_list() {
        let restaurants: Vec<Restaurant> = parse_list(r#"{"message": "no data"}"#).unwrap();
        assert!(restaurants.is_empty());
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let result: Result<Vec<Restaurant>, _> = parse_list("<html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));

        let wrong_shape: Result<Vec<Restaurant>, _> = parse_list(r#"[{"id": "x"}]"#);
        assert!(matches!(wrong_shape, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_error_messages() {
        let error = ApiError::Status { status: 401, body: "Unauthorized".to_string() };
        assert_eq!(error.to_string(), "Server error 401: Unauthorized");
        assert_eq!(ApiError::Network("offline".into()).to_string(), "Network error: offline");
    }

    #[test]
    fn test_custom_base_url() {
        let client = ApiClient::with_base_url("http://10.0.0.5:4041/api/v1".to_string());
        assert_eq!(client.base_url(), "http://10.0.0.5:4041/api/v1");
        assert_eq!(client.url("/order-types/9"), "http://10.0.0.5:4041/api/v1/order-types/9");
    }

    fn body_json(call: &WriteCall) -> serde_json::Value {
        serde_json::from_str(call.body.as_deref().unwrap()).unwrap()
    }

    fn sample_payload() -> OrderPayload {
        OrderPayload {
            full_name: "Aman Orazov".to_string(),
            phonenumber: "+99365123456".to_string(),
            order_type_id: 5,
            date: "2024-03-10".to_string(),
            chair_count: 20,
            price: 150.0,
            discount: 10.0,
            status: shared::OrderStatus::Accepted,
            offsite: false,
            note: String::new(),
            comment: "Window table".to_string(),
        }
    }

    #[test]
    fn test_login_call() {
        let call = WriteCall::login(&LoginRequest::new("63744444", "secret")).unwrap();
        assert_eq!(call.method, WriteMethod::Post);
        assert_eq!(call.path, "/authentications/login");
        assert_eq!(body_json(&call), serde_json::json!({ "username": "63744444", "password": "secret" }));
    }

    #[test]
    fn test_order_calls() {
        let create = WriteCall::create_order(&sample_payload()).unwrap();
        assert_eq!((create.method, create.path.as_str()), (WriteMethod::Post, "/orders"));
        assert_eq!(body_json(&create)["orderTypeId"], 5);

        let update = WriteCall::update_order(42, &sample_payload()).unwrap();
        assert_eq!((update.method, update.path.as_str()), (WriteMethod::Patch, "/orders/42"));
        assert_eq!(body_json(&update)["status"], "accepted");
    }

    #[test]
    fn test_order_type_calls() {
        let body = NewOrderType {
            name: "Banquet".to_string(),
            price: 75.0,
            is_active: true,
            restaurant_id: 7,
        };
        let create = WriteCall::create_order_type(&body).unwrap();
        assert_eq!((create.method, create.path.as_str()), (WriteMethod::Post, "/order-types"));
        assert_eq!(body_json(&create)["restaurantId"], 7);

        let update = WriteCall::update_order_type(9, &OrderTypeUpdate::active(7, false)).unwrap();
        assert_eq!((update.method, update.path.as_str()), (WriteMethod::Patch, "/order-types/9"));
        assert_eq!(body_json(&update), serde_json::json!({ "isActive": false, "restaurantId": 7 }));

        let delete = WriteCall::delete_order_type(9);
        assert_eq!(delete.method, WriteMethod::Delete);
        assert_eq!(delete.path, "/order-types/9");
        assert_eq!(delete.body, None);
    }

    #[test]
    fn test_unencodable_body_is_encode_error() {
        // JSON object keys must be strings
        let mut body = std::collections::HashMap::new();
        body.insert((1, 2), "x");
        let result = WriteCall::with_body(WriteMethod::Post, "/orders".to_string(), &body);
        assert!(matches!(result, Err(ApiError::Encode(_))));
        assert!(ApiError::Encode("bad".into()).to_string().starts_with("Failed to encode request"));
    }
}
