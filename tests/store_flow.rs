use storefront_api::models::{CartItem, WishlistItem};
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

fn wishlist_item(id: &str, price: f64) -> WishlistItem {
    WishlistItem {
        id: id.to_string(),
        name: format!("Product {id}"),
        price,
        image: format!("/products/{id}.jpg"),
        rating: 4.5,
        reviews: 100,
        stock: 10,
    }
}

#[test]
fn repeated_cart_adds_merge_into_one_entry() {
    let store = Store::new();
    store.add_to_cart(cart_item("1", 10.0, 2));
    store.add_to_cart(cart_item("2", 5.0, 1));
    store.add_to_cart(cart_item("1", 10.0, 3));

    let cart = store.cart();
    assert_eq!(cart.len(), 2);
    // In-place merge keeps the original insertion order.
    assert_eq!(cart[0].id, "1");
    assert_eq!(cart[0].quantity, 5);
    assert_eq!(cart[1].id, "2");
    assert_eq!(cart[1].quantity, 1);
}

#[test]
fn merge_preserves_existing_entry_fields() {
    let store = Store::new();
    store.add_to_cart(cart_item("1", 10.0, 1));

    let mut changed = cart_item("1", 99.0, 1);
    changed.name = "Renamed".to_string();
    store.add_to_cart(changed);

    let cart = store.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].price, 10.0);
    assert_eq!(cart[0].name, "Product 1");
    assert_eq!(cart[0].quantity, 2);
}

#[test]
fn add_to_cart_clamps_quantity_to_one() {
    let store = Store::new();
    let added = store.add_to_cart(cart_item("1", 10.0, 0));
    assert_eq!(added.quantity, 1);
}

#[test]
fn remove_from_cart_is_idempotent() {
    let store = Store::new();
    store.add_to_cart(cart_item("1", 10.0, 1));

    assert!(store.remove_from_cart("1"));
    assert!(!store.remove_from_cart("1"));
    assert!(store.cart().is_empty());
}

#[test]
fn update_cart_quantity_sets_and_clamps() {
    let store = Store::new();
    store.add_to_cart(cart_item("1", 10.0, 2));

    let updated = store.update_cart_quantity("1", 7).expect("item present");
    assert_eq!(updated.quantity, 7);

    let clamped = store.update_cart_quantity("1", 0).expect("item present");
    assert_eq!(clamped.quantity, 1);

    assert!(store.update_cart_quantity("missing", 3).is_none());
}

#[test]
fn clear_cart_empties_unconditionally() {
    let store = Store::new();
    store.add_to_cart(cart_item("1", 10.0, 1));
    store.add_to_cart(cart_item("2", 5.0, 4));

    store.clear_cart();
    assert!(store.cart().is_empty());

    // Clearing an already empty cart is fine too.
    store.clear_cart();
    assert!(store.cart().is_empty());
}

#[test]
fn wishlist_duplicate_add_keeps_first_item() {
    let store = Store::new();
    store.add_to_wishlist(wishlist_item("1", 10.0));

    let returned = store.add_to_wishlist(wishlist_item("1", 42.0));
    assert_eq!(returned.price, 10.0);

    let wishlist = store.wishlist();
    assert_eq!(wishlist.len(), 1);
    assert_eq!(wishlist[0].price, 10.0);
}

#[test]
fn wishlist_membership_tracks_add_and_remove() {
    let store = Store::new();
    assert!(!store.is_in_wishlist("1"));

    store.add_to_wishlist(wishlist_item("1", 10.0));
    assert!(store.is_in_wishlist("1"));

    assert!(store.remove_from_wishlist("1"));
    assert!(!store.is_in_wishlist("1"));
    assert!(!store.remove_from_wishlist("1"));
}

#[test]
fn orders_append_without_dedup() {
    use storefront_api::models::{Order, OrderStatus};

    let store = Store::new();
    let order = Order {
        id: "ORDER_TEST".to_string(),
        items: vec![cart_item("1", 10.0, 1)],
        total: 21.0,
        status: OrderStatus::Pending,
        date: "Aug 6, 2026".to_string(),
    };

    store.add_order(order.clone());
    store.add_order(order);

    assert_eq!(store.orders().len(), 2);
    assert!(store.find_order("ORDER_TEST").is_some());
    assert!(store.find_order("ORDER_OTHER").is_none());
}
