use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{CartItem, Order, WishlistItem};

#[derive(Debug, Default)]
struct StoreInner {
    cart: Vec<CartItem>,
    wishlist: Vec<WishlistItem>,
    orders: Vec<Order>,
}

/// In-memory store for cart, wishlist and order history. One instance
/// lives in `AppState` for the lifetime of the process; every operation
/// takes the lock once, so each mutation is atomic as seen by callers.
///
/// Mutations are total functions: absent ids, duplicate adds and
/// out-of-range quantities are normalized, never rejected.
#[derive(Debug, Default)]
pub struct Store {
    inner: RwLock<StoreInner>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Merge an item into the cart. An existing entry with the same id
    /// keeps its position and fields and has its quantity incremented;
    /// otherwise the item is appended. Quantity never drops below 1.
    pub fn add_to_cart(&self, mut item: CartItem) -> CartItem {
        item.quantity = item.quantity.max(1);
        let mut inner = self.write();
        if let Some(existing) = inner.cart.iter_mut().find(|i| i.id == item.id) {
            existing.quantity += item.quantity;
            existing.clone()
        } else {
            inner.cart.push(item.clone());
            item
        }
    }

    /// Returns whether an entry was removed. Removing an absent id is a
    /// no-op, not an error.
    pub fn remove_from_cart(&self, id: &str) -> bool {
        let mut inner = self.write();
        let before = inner.cart.len();
        inner.cart.retain(|i| i.id != id);
        inner.cart.len() != before
    }

    /// Set an entry's quantity, clamped to a minimum of 1. Returns the
    /// updated entry, or `None` if the id is not in the cart.
    pub fn update_cart_quantity(&self, id: &str, quantity: u32) -> Option<CartItem> {
        let mut inner = self.write();
        let item = inner.cart.iter_mut().find(|i| i.id == id)?;
        item.quantity = quantity.max(1);
        Some(item.clone())
    }

    pub fn clear_cart(&self) {
        self.write().cart.clear();
    }

    pub fn cart(&self) -> Vec<CartItem> {
        self.read().cart.clone()
    }

    /// Set semantics: adding an id already present is a no-op that
    /// preserves the first-added item's fields.
    pub fn add_to_wishlist(&self, item: WishlistItem) -> WishlistItem {
        let mut inner = self.write();
        if let Some(existing) = inner.wishlist.iter().find(|i| i.id == item.id) {
            existing.clone()
        } else {
            inner.wishlist.push(item.clone());
            item
        }
    }

    pub fn remove_from_wishlist(&self, id: &str) -> bool {
        let mut inner = self.write();
        let before = inner.wishlist.len();
        inner.wishlist.retain(|i| i.id != id);
        inner.wishlist.len() != before
    }

    pub fn is_in_wishlist(&self, id: &str) -> bool {
        self.read().wishlist.iter().any(|i| i.id == id)
    }

    pub fn wishlist(&self) -> Vec<WishlistItem> {
        self.read().wishlist.clone()
    }

    /// Append only; order ids are never deduplicated here, generating a
    /// sufficiently unique id is the caller's job.
    pub fn add_order(&self, order: Order) {
        self.write().orders.push(order);
    }

    pub fn orders(&self) -> Vec<Order> {
        self.read().orders.clone()
    }

    pub fn find_order(&self, id: &str) -> Option<Order> {
        self.read().orders.iter().find(|o| o.id == id).cloned()
    }
}
