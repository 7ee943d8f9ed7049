use storefront_api::error::AppError;
use storefront_api::services::price_service::{extract_json_object, parse_market_prices};

#[test]
fn extracts_first_to_last_brace_span() {
    let text = "Sure! Here are the estimates:\n```json\n{\"a\": 1}\n```\nHope that helps.";
    assert_eq!(extract_json_object(text), Some("{\"a\": 1}"));
}

#[test]
fn extraction_requires_a_brace_pair() {
    assert_eq!(extract_json_object("no json here"), None);
    assert_eq!(extract_json_object("only open {"), None);
    assert_eq!(extract_json_object("} reversed {"), None);
}

#[test]
fn parses_shape_wrapped_in_prose() {
    let text = r#"Here is the comparison you asked for:

{
  "amazon": { "price": 119.99, "discount": 12 },
  "flipkart": { "price": 124.5, "discount": 8 },
  "blinkit": { "price": 0, "discount": 0 }
}

Prices are rough estimates."#;

    let prices = parse_market_prices(text).expect("valid shape");
    assert_eq!(prices.amazon.price, 119.99);
    assert_eq!(prices.amazon.discount, 12.0);
    assert_eq!(prices.flipkart.price, 124.5);
    // 0 is the not-available sentinel, accepted as-is.
    assert_eq!(prices.blinkit.price, 0.0);
}

#[test]
fn text_without_object_is_a_parse_error() {
    let err = parse_market_prices("I cannot help with that.").expect_err("no span");
    assert!(matches!(err, AppError::UnparseableResponse));
}

#[test]
fn missing_platform_key_is_rejected() {
    let text = r#"{
  "amazon": { "price": 119.99, "discount": 12 },
  "flipkart": { "price": 124.5, "discount": 8 }
}"#;
    let err = parse_market_prices(text).expect_err("blinkit missing");
    assert!(matches!(err, AppError::UnparseableResponse));
}

#[test]
fn non_numeric_field_is_rejected() {
    let text = r#"{
  "amazon": { "price": "about 120", "discount": 12 },
  "flipkart": { "price": 124.5, "discount": 8 },
  "blinkit": { "price": 0, "discount": 0 }
}"#;
    let err = parse_market_prices(text).expect_err("string price");
    assert!(matches!(err, AppError::UnparseableResponse));
}

#[test]
fn malformed_span_is_rejected_not_repaired() {
    // Greedy first-to-last extraction swallows both objects; the strict
    // decode then refuses the combined span.
    let text = r#"{"amazon": {"price": 1, "discount": 0}} and also {"flipkart": {}}"#;
    let err = parse_market_prices(text).expect_err("two objects");
    assert!(matches!(err, AppError::UnparseableResponse));
}
