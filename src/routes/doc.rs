use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    models::{
        CartItem, Category, MarketPrices, Order, OrderStatus, PlatformQuote, Product, WishlistItem,
    },
    response::{ApiResponse, Meta},
    routes::{cart, health, orders, params, prices, products, wishlist},
    services::{
        order_service::CartTotals,
        price_service::{ComparePricesRequest, ComparePricesResponse},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        products::list_categories,
        cart::cart_list,
        cart::add_to_cart,
        cart::update_cart_quantity,
        cart::remove_from_cart,
        cart::clear_cart,
        wishlist::list_wishlist,
        wishlist::add_to_wishlist,
        wishlist::wishlist_membership,
        wishlist::remove_from_wishlist,
        orders::list_orders,
        orders::checkout,
        orders::get_order,
        prices::compare_prices
    ),
    components(
        schemas(
            Product,
            Category,
            CartItem,
            WishlistItem,
            Order,
            OrderStatus,
            PlatformQuote,
            MarketPrices,
            CartTotals,
            ComparePricesRequest,
            ComparePricesResponse,
            health::HealthData,
            products::ProductList,
            products::CategoryList,
            cart::AddToCartRequest,
            cart::UpdateQuantityRequest,
            cart::CartSummary,
            wishlist::AddToWishlistRequest,
            wishlist::WishlistList,
            wishlist::WishlistMembership,
            orders::OrderList,
            params::Pagination,
            params::ProductQuery,
            Meta,
            ApiResponse<Product>,
            ApiResponse<products::ProductList>,
            ApiResponse<cart::CartSummary>,
            ApiResponse<wishlist::WishlistList>,
            ApiResponse<orders::OrderList>,
            ApiResponse<Order>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Read-only catalog endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Wishlist", description = "Wishlist endpoints"),
        (name = "Orders", description = "Order history and checkout"),
        (name = "Prices", description = "Market price comparison"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
