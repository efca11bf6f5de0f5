use async_trait::async_trait;
use serde_json::{json, Value};
use thiserror::Error;

use crate::shopify::models::{MetafieldPayload, ProductPayload};

#[cfg(test)]
use mockall::automock;

/// Fehler des Shopify Clients
#[derive(Debug, Error)]
pub enum ShopifyError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Shopify API Error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("Response contains no product id")]
    MissingProductId,
}

/// Abstraktion über die Ziel-Plattform (mockbar für Tests)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProductPlatform: Send + Sync {
    /// Lege neues Produkt an, liefert die erzeugte Produkt-Id
    async fn create_product(&self, product: &ProductPayload) -> Result<u64, ShopifyError>;

    /// Lege Metafield für ein bestehendes Produkt an
    async fn create_metafield(
        &self,
        product_id: u64,
        metafield: &MetafieldPayload,
    ) -> Result<(), ShopifyError>;
}

/// Shopify Admin REST Client
pub struct ShopifyClient {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl ShopifyClient {
    /// Erstelle neuen Client für Shop + Access Token
    pub fn new(
        client: reqwest::Client,
        shop: &str,
        api_version: &str,
        access_token: String,
    ) -> Self {
        Self {
            client,
            base_url: format!("https://{}/admin/api/{}", shop, api_version),
            access_token,
        }
    }

    // Je nach API Version liefert Shopify { "product": { "id": .. } }
    // oder direkt { "id": .. }; Ids teils als Zahl, teils als String
    fn extract_product_id(body: &Value) -> Option<u64> {
        Self::id_value(&body["product"]["id"]).or_else(|| Self::id_value(&body["id"]))
    }

    fn id_value(value: &Value) -> Option<u64> {
        value
            .as_u64()
            .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
    }
}

#[async_trait]
impl ProductPlatform for ShopifyClient {
    async fn create_product(&self, product: &ProductPayload) -> Result<u64, ShopifyError> {
        let url = format!("{}/products.json", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("X-Shopify-Access-Token", &self.access_token)
            .json(&json!({ "product": product }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await?;
            return Err(ShopifyError::Api { status, body });
        }

        let body: Value = response.json().await?;

        Self::extract_product_id(&body).ok_or(ShopifyError::MissingProductId)
    }

    async fn create_metafield(
        &self,
        product_id: u64,
        metafield: &MetafieldPayload,
    ) -> Result<(), ShopifyError> {
        let url = format!("{}/products/{}/metafields.json", self.base_url, product_id);

        let response = self
            .client
            .post(&url)
            .header("X-Shopify-Access-Token", &self.access_token)
            .json(&json!({ "metafield": metafield }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await?;
            return Err(ShopifyError::Api { status, body });
        }

        Ok(())
    }
}
