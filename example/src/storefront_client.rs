use crate::data::checkout::{CheckoutRequest, CheckoutSession, LineItem, LoginRequest};
use crate::data::product::Product;
use crate::error::Error;
use fetch_sim::{CallConfiguration, Fetch};
use serde::de::DeserializeOwned;
use tracing::debug;

const DEFAULT_PRODUCTS_ENDPOINT: &str = "https://gmtww-products.cfjcd.workers.dev";
const DEFAULT_CHECKOUT_ENDPOINT: &str = "https://gmtww-stripe.cfjcd.workers.dev";
const DEFAULT_AUTH_ENDPOINT: &str = "https://gmtww-auth.cfjcd.workers.dev";

/// Builder used to build a StorefrontClient instance
#[derive(Debug, Clone, Default)]
pub struct StorefrontClientBuilder {
    products_endpoint: Option<String>,
    checkout_endpoint: Option<String>,
    auth_endpoint: Option<String>,
}

impl StorefrontClientBuilder {
    /// Create a new StorefrontClientBuilder instance.
    pub fn new() -> Self {
        Self {
            products_endpoint: None,
            checkout_endpoint: None,
            auth_endpoint: None,
        }
    }

    /// Use the given endpoint when listing products.
    ///
    /// # Arguments
    /// `endpoint` - the product list endpoint.
    ///
    /// # Returns
    /// This builder.
    pub fn with_products_endpoint<T: Into<String>>(mut self, endpoint: T) -> Self {
        self.products_endpoint = Some(endpoint.into());
        self
    }

    /// Use the given endpoint when creating checkout sessions.
    ///
    /// # Arguments
    /// `endpoint` - the checkout session endpoint.
    ///
    /// # Returns
    /// This builder.
    pub fn with_checkout_endpoint<T: Into<String>>(mut self, endpoint: T) -> Self {
        self.checkout_endpoint = Some(endpoint.into());
        self
    }

    /// Use the given endpoint when logging in.
    ///
    /// # Arguments
    /// `endpoint` - the authorization endpoint.
    ///
    /// # Returns
    /// This builder.
    pub fn with_auth_endpoint<T: Into<String>>(mut self, endpoint: T) -> Self {
        self.auth_endpoint = Some(endpoint.into());
        self
    }

    /// Consume the builder and create a StorefrontClient instance using all of the previously configured values or
    /// their defaults.
    ///
    /// # Arguments
    /// `fetch` - the fetch implementation every call goes through.
    ///
    /// # Returns
    /// A StorefrontClient instance.
    pub fn build<F: Fetch>(mut self, fetch: F) -> StorefrontClient<F> {
        StorefrontClient {
            fetch,
            products_endpoint: self
                .products_endpoint
                .take()
                .unwrap_or_else(|| String::from(DEFAULT_PRODUCTS_ENDPOINT)),
            checkout_endpoint: self
                .checkout_endpoint
                .take()
                .unwrap_or_else(|| String::from(DEFAULT_CHECKOUT_ENDPOINT)),
            auth_endpoint: self
                .auth_endpoint
                .take()
                .unwrap_or_else(|| String::from(DEFAULT_AUTH_ENDPOINT)),
        }
    }
}

/// Struct that represents a storefront API client.
///
/// The client is generic over [`Fetch`], so the same code runs against the network or a
/// [`fetch_sim::FetchSimulator`].
#[derive(Debug, Clone)]
pub struct StorefrontClient<F> {
    fetch: F,
    products_endpoint: String,
    checkout_endpoint: String,
    auth_endpoint: String,
}

impl<F: Fetch> StorefrontClient<F> {
    /// Create a StorefrontClient with the default endpoints.
    ///
    /// # Returns
    /// A StorefrontClient.
    pub fn new(fetch: F) -> Self {
        StorefrontClientBuilder::new().build(fetch)
    }

    /// Gets the product catalog.
    ///
    /// # Returns
    /// Every product currently listed.
    pub async fn list_products(&self) -> Result<Vec<Product>, Error> {
        let products: Vec<Product> = self
            .call(&self.products_endpoint, CallConfiguration::new())
            .await?;

        debug!(count = products.len(), "Fetched product list");

        Ok(products)
    }

    /// Creates a checkout session for the given cart.
    ///
    /// # Arguments
    /// `line_items` - the products and quantities to pay for. It should not be empty.
    /// `success_url` - where the payment provider sends the customer after paying.
    /// `cancel_url` - where the payment provider sends the customer after cancelling.
    ///
    /// # Returns
    /// The checkout session, which carries the URL to redirect the customer to.
    pub async fn create_checkout_session<T: AsRef<str>>(
        &self,
        line_items: &[LineItem],
        success_url: T,
        cancel_url: T,
    ) -> Result<CheckoutSession, Error> {
        if line_items.is_empty() {
            return Err(Error::EmptyCart);
        }

        let body = serde_json::to_string(&CheckoutRequest {
            line_items,
            success_url: success_url.as_ref(),
            cancel_url: cancel_url.as_ref(),
        })?;

        self.call(
            &self.checkout_endpoint,
            CallConfiguration::new().with_method("POST").with_body(body),
        )
        .await
    }

    /// Logs in and returns a session token.
    ///
    /// # Arguments
    /// `username` - the account name.
    /// `password` - the account password.
    ///
    /// # Returns
    /// The session token.
    pub async fn login<T: AsRef<str>>(&self, username: T, password: T) -> Result<String, Error> {
        let body = serde_json::to_string(&LoginRequest {
            username: username.as_ref(),
            password: password.as_ref(),
        })?;

        self.call(
            &self.auth_endpoint,
            CallConfiguration::new().with_method("POST").with_body(body),
        )
        .await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        configuration: CallConfiguration,
    ) -> Result<T, Error> {
        let response = self.fetch.fetch(endpoint, configuration).await?;

        if !response.ok() {
            return Err(Error::UnsuccessfulResponse(response.status().as_u16()));
        }

        Ok(response.json_as().await?)
    }
}
