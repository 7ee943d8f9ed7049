use storefront_api::error::AppError;
use storefront_api::models::{CartItem, OrderStatus};
use storefront_api::services::order_service;
use storefront_api::store::Store;

fn cart_item(id: &str, price: f64, quantity: u32) -> CartItem {
    CartItem {
        id: id.to_string(),
        name: format!("Product {id}"),
        price,
        quantity,
        image: format!("/products/{id}.jpg"),
    }
}

#[test]
fn totals_apply_fixed_tax_and_shipping() {
    let items = vec![cart_item("1", 10.0, 2), cart_item("2", 5.0, 1)];

    let totals = order_service::cart_totals(&items);
    assert_eq!(totals.subtotal, 25.0);
    assert_eq!(totals.tax, 2.5);
    assert_eq!(totals.shipping, 10.0);
    assert_eq!(totals.total, 37.5);
}

#[test]
fn totals_of_empty_cart_are_shipping_only() {
    let totals = order_service::cart_totals(&[]);
    assert_eq!(totals.subtotal, 0.0);
    assert_eq!(totals.tax, 0.0);
    assert_eq!(totals.total, 10.0);
}

#[test]
fn checkout_snapshots_cart_into_pending_order() {
    let store = Store::new();
    store.add_to_cart(cart_item("1", 10.0, 2));
    store.add_to_cart(cart_item("2", 5.0, 1));
    let snapshot = store.cart();

    let order = order_service::checkout(&store).expect("non-empty cart");

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items, snapshot);
    assert_eq!(order.total, 37.5);

    let suffix = order.id.strip_prefix("ORDER_").expect("id prefix");
    assert!(!suffix.is_empty());
    assert!(
        suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()),
        "base-36 uppercase id, got {suffix}"
    );

    // Cart is cleared, the order is recorded.
    assert!(store.cart().is_empty());
    let orders = store.orders();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, order.id);
}

#[test]
fn checkout_rejects_empty_cart() {
    let store = Store::new();
    let err = order_service::checkout(&store).expect_err("empty cart");
    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(store.orders().is_empty());
}
