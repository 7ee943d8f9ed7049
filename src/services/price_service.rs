use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::MarketPrices,
    state::AppState,
};

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComparePricesRequest {
    pub product_name: Option<String>,
    pub base_price: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComparePricesResponse {
    pub product_name: String,
    pub base_price: f64,
    pub market_prices: MarketPrices,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// One delegate call per request; no caching, no retry.
pub async fn compare_prices(
    state: &AppState,
    payload: ComparePricesRequest,
) -> AppResult<ComparePricesResponse> {
    let (product_name, base_price) = validate(payload)?;

    let api_key = state
        .config
        .gemini_api_key
        .as_deref()
        .ok_or(AppError::ApiKeyMissing)?;

    let request = GenerateRequest {
        contents: vec![RequestContent {
            parts: vec![RequestPart {
                text: build_prompt(&product_name),
            }],
        }],
    };

    let response = state
        .http
        .post(GEMINI_ENDPOINT)
        .header("x-goog-api-key", api_key)
        .json(&request)
        .send()
        .await
        .inspect_err(|err| tracing::error!(error = %err, "delegate request failed"))?
        .error_for_status()
        .inspect_err(|err| tracing::error!(error = %err, "delegate returned error status"))?;

    let generated: GenerateResponse = response
        .json()
        .await
        .inspect_err(|err| tracing::error!(error = %err, "delegate response body unreadable"))?;

    let text = candidate_text(generated);
    let market_prices = parse_market_prices(&text)?;

    tracing::debug!(product = %product_name, "price comparison fetched");

    Ok(ComparePricesResponse {
        product_name,
        base_price,
        market_prices,
    })
}

fn validate(payload: ComparePricesRequest) -> AppResult<(String, f64)> {
    match (payload.product_name, payload.base_price) {
        (Some(name), Some(price)) if !name.is_empty() && price > 0.0 => Ok((name, price)),
        _ => Err(AppError::BadRequest(
            "Product name and base price are required".into(),
        )),
    }
}

fn build_prompt(product_name: &str) -> String {
    format!(
        r#"Based on typical market prices for "{product_name}", provide estimated prices on these platforms:

Please respond in JSON format only, with no additional text:
{{
  "amazon": {{ "price": number, "discount": number }},
  "flipkart": {{ "price": number, "discount": number }},
  "blinkit": {{ "price": number, "discount": number }}
}}

Where price is in USD and discount is percentage. Prices should be realistic estimates for this product. If product is not typically available on a platform, use 0."#
    )
}

fn candidate_text(generated: GenerateResponse) -> String {
    generated
        .candidates
        .into_iter()
        .next()
        .map(|candidate| {
            candidate
                .content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect()
        })
        .unwrap_or_default()
}

/// The first `{` through the last `}` of the delegate's free text. The
/// model is asked for bare JSON but routinely wraps it in prose or code
/// fences.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Strict decode of the extracted span: all three platform keys must be
/// present with numeric fields, otherwise the whole response is
/// rejected. No partial results.
pub fn parse_market_prices(text: &str) -> AppResult<MarketPrices> {
    let span = extract_json_object(text).ok_or(AppError::UnparseableResponse)?;
    serde_json::from_str(span).map_err(|err| {
        tracing::warn!(error = %err, "delegate output failed shape validation");
        AppError::UnparseableResponse
    })
}
