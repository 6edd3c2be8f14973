//! HTTP implementation of the commerce API

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use shared::models::{Cart, CartLineRequest, OrderPayload, Product};
use shared::response::{ApiRequest, CartResponse, ErrorResponse, ProductsResponse};

use crate::api::CommerceApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// HTTP client for the remote commerce API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    api_path: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_path: config.api_path.clone(),
        })
    }

    /// Build the full URL for an operation path
    fn url(&self, tail: &str) -> String {
        format!("{}/api/{}/{}", self.base_url, self.api_path, tail)
    }

    async fn get<T: DeserializeOwned>(&self, tail: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(tail)).send().await?;
        Self::handle_response(response).await
    }

    async fn post<B: serde::Serialize>(&self, tail: &str, body: &B) -> ClientResult<()> {
        let response = self.client.post(self.url(tail)).json(body).send().await?;
        Self::check_ack(response).await
    }

    async fn put<B: serde::Serialize>(&self, tail: &str, body: &B) -> ClientResult<()> {
        let response = self.client.put(self.url(tail)).json(body).send().await?;
        Self::check_ack(response).await
    }

    async fn delete(&self, tail: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(tail)).send().await?;
        Self::check_ack(response).await
    }

    /// Decode a typed success body, or surface the server's error message
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::api_error(status, response).await);
        }
        response.json().await.map_err(Into::into)
    }

    /// Consume an ack-only response, keeping only the outcome
    async fn check_ack(response: reqwest::Response) -> ClientResult<()> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::api_error(status, response).await);
        }
        Ok(())
    }

    async fn api_error(status: StatusCode, response: reqwest::Response) -> ClientError {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| format!("request failed with status {status}"));
        ClientError::Api { status, message }
    }
}

#[async_trait]
impl CommerceApi for HttpClient {
    async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        let response: ProductsResponse = self.get("products/all").await?;
        Ok(response.products)
    }

    async fn fetch_cart(&self) -> ClientResult<Cart> {
        let response: CartResponse = self.get("cart").await?;
        Ok(response.data)
    }

    async fn add_cart_line(&self, item: &CartLineRequest) -> ClientResult<()> {
        self.post("cart", &ApiRequest::new(item)).await
    }

    async fn update_cart_line(&self, line_id: &str, item: &CartLineRequest) -> ClientResult<()> {
        self.put(&format!("cart/{line_id}"), &ApiRequest::new(item))
            .await
    }

    async fn remove_cart_line(&self, line_id: &str) -> ClientResult<()> {
        self.delete(&format!("cart/{line_id}")).await
    }

    async fn clear_cart(&self) -> ClientResult<()> {
        self.delete("carts").await
    }

    async fn submit_order(&self, order: &OrderPayload) -> ClientResult<()> {
        self.post("order", &ApiRequest::new(order)).await
    }
}
