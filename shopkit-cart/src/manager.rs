use crate::models::{Cart, CartSummary};
use shopkit_catalog::{pricing, CatalogError, Item, ItemId};
use shopkit_store::CartConfig;

/// Owns a single cart and the operations on it.
///
/// Each store is isolated; there is no process-wide cart.
pub struct CartStore {
    cart: Cart,
    config: CartConfig,
}

impl CartStore {
    pub fn new() -> Self {
        Self::with_config(CartConfig::default())
    }

    pub fn with_config(config: CartConfig) -> Self {
        Self {
            cart: Cart::new(config.currency.clone()),
            config,
        }
    }

    /// Empty the cart. Idempotent.
    pub fn clear(&mut self) {
        let dropped = self.cart.items.len();
        self.cart.clear();
        tracing::debug!(dropped, "Cleared cart");
    }

    /// Append an item to the end of the cart
    pub fn add_item(&mut self, item: Item) {
        tracing::debug!(item_id = %item.id, name = %item.name, "Adding item to cart");
        self.cart.push(item);
    }

    /// Remove the first entry with the given id.
    ///
    /// An unknown id is a no-op unless `strict_removal` is configured.
    pub fn remove_item(&mut self, item_id: &ItemId) -> Result<(), CartError> {
        match self.cart.take(item_id) {
            Some(item) => {
                tracing::debug!(item_id = %item.id, name = %item.name, "Removed item from cart");
                Ok(())
            }
            None if self.config.strict_removal => Err(CartError::ItemNotInCart(item_id.to_string())),
            None => {
                tracing::warn!(item_id = %item_id, "Item not in cart, nothing removed");
                Ok(())
            }
        }
    }

    /// Set the quantity of the first entry with the given id
    pub fn update_quantity(&mut self, item_id: &ItemId, quantity: u32) -> Result<(), CartError> {
        let index = self.cart.position(item_id)
            .ok_or_else(|| CartError::ItemNotInCart(item_id.to_string()))?;

        self.cart.items[index].set_quantity(quantity)?;
        tracing::debug!(item_id = %item_id, quantity, "Updated item quantity");
        Ok(())
    }

    /// Current contents in insertion order
    pub fn items(&self) -> &[Item] {
        &self.cart.items
    }

    /// Number of entries (not the sum of quantities)
    pub fn len(&self) -> usize {
        self.cart.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.items.is_empty()
    }

    /// Sum of quantities, widened so it cannot overflow
    pub fn total_quantity(&self) -> u64 {
        self.cart.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of price * quantity, rounded to cents
    pub fn total_cost(&self) -> f64 {
        pricing::subtotal(&self.cart.items)
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            item_count: self.len(),
            total_quantity: self.total_quantity(),
            total_cost: self.total_cost(),
            currency: self.cart.currency.clone(),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
