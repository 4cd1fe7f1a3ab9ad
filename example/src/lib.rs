mod data;
mod error;
mod storefront_client;

pub use data::checkout::{CheckoutSession, LineItem};
pub use data::product::Product;
pub use error::Error;
pub use storefront_client::{StorefrontClient, StorefrontClientBuilder};
