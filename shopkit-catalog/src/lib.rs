pub mod item;
pub mod pricing;

pub use item::{create_item, CatalogError, Item, ItemId, ItemRecord};
pub use pricing::{round_to_cents, subtotal};
