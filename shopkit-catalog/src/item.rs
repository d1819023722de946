use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of an item, assigned once at creation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, priced unit offered for purchase.
///
/// Equality is by identity: two items created with the same name and price
/// are distinct, while a clone denotes the same item. Deserialisation goes
/// through [`ItemRecord`] so a stored quantity of zero is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            price,
            quantity: 1,
        }
    }

    /// Price times quantity, unrounded
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }

    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), CatalogError> {
        if quantity == 0 {
            return Err(CatalogError::InvalidQuantity(quantity));
        }
        self.quantity = quantity;
        Ok(())
    }
}

/// Unchecked wire form of an [`Item`]
#[derive(Debug, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl TryFrom<ItemRecord> for Item {
    type Error = CatalogError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        if record.quantity == 0 {
            return Err(CatalogError::InvalidQuantity(record.quantity));
        }
        Ok(Self {
            id: record.id,
            name: record.name,
            price: record.price,
            quantity: record.quantity,
        })
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

/// Create a new item with a quantity of one. The item is not placed in any cart.
pub fn create_item(name: impl Into<String>, price: f64) -> Item {
    Item::new(name, price)
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid quantity: {0} (must be at least 1)")]
    InvalidQuantity(u32),
}
