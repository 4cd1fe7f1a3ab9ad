use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: String,
    pub quantity: u32,
}

#[derive(Serialize, Debug)]
pub(crate) struct CheckoutRequest<'a> {
    pub line_items: &'a [LineItem],
    pub success_url: &'a str,
    pub cancel_url: &'a str,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CheckoutSession {
    pub url: String,
}

#[derive(Serialize, Debug)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}
