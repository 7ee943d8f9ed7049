pub mod order_service;
pub mod price_service;
