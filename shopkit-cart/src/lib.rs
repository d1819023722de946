pub mod models;
pub mod manager;

pub use models::{Cart, CartSummary};
pub use manager::{CartError, CartStore};
