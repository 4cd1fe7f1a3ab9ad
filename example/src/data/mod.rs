pub mod checkout;
pub mod product;
