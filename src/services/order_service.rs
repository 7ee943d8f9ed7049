use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{CartItem, Order, OrderStatus},
    store::Store,
};

pub const TAX_RATE: f64 = 0.1;
pub const SHIPPING_COST: f64 = 10.0;

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct CartTotals {
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
}

/// Pure derivation over cart contents; nothing here reads or writes the
/// store.
pub fn cart_totals(items: &[CartItem]) -> CartTotals {
    let subtotal: f64 = items
        .iter()
        .map(|item| item.price * f64::from(item.quantity))
        .sum();
    let tax = subtotal * TAX_RATE;
    CartTotals {
        subtotal,
        shipping: SHIPPING_COST,
        tax,
        total: subtotal + tax + SHIPPING_COST,
    }
}

/// Snapshot the cart into a new pending order, record it, then clear
/// the cart.
pub fn checkout(store: &Store) -> AppResult<Order> {
    let items = store.cart();
    if items.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".into()));
    }

    let totals = cart_totals(&items);
    let now = Utc::now();
    let order = Order {
        id: build_order_id(now.timestamp_millis()),
        items,
        total: totals.total,
        status: OrderStatus::Pending,
        date: now.format("%b %-d, %Y").to_string(),
    };

    store.add_order(order.clone());
    store.clear_cart();

    Ok(order)
}

fn build_order_id(millis: i64) -> String {
    format!("ORDER_{}", base36_upper(millis.max(0) as u64))
}

fn base36_upper(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.iter().rev().map(|&b| char::from(b)).collect()
}
