use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use shopkit_catalog::{Item, ItemId};

/// The ordered collection of items for one shopping session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<Item>,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(currency: String) -> Self {
        let now = Utc::now();
        Self {
            items: Vec::new(),
            currency,
            created_at: now,
            updated_at: now,
        }
    }

    /// Append an item (no duplicate check)
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
        self.touch();
    }

    /// Remove the first entry with this id, returning it
    pub fn take(&mut self, item_id: &ItemId) -> Option<Item> {
        let index = self.position(item_id)?;
        let item = self.items.remove(index);
        self.touch();
        Some(item)
    }

    pub fn position(&self, item_id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == *item_id)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Point-in-time totals for a cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    pub item_count: usize,
    pub total_quantity: u64,
    pub total_cost: f64,
    pub currency: String,
}
