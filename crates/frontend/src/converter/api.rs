use contracts::rates::{ConversionError, RateDocument};
use gloo_net::http::Request;

/// Daily-updated rates from the Fawaz Ahmed currency API via the jsDelivr CDN.
/// "latest" always points at the newest published dataset.
const RATE_API_BASE: &str =
    "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@latest/v1/currencies";

/// Fetch the rate for one (source, target) pair.
///
/// One GET per call, no caching: the provider publishes every target rate for
/// a source currency in a single document keyed by the lowercase source code,
/// e.g. `GET /usd.json` → `{ "usd": { "lkr": 300.0, ... } }`.
pub async fn fetch_rate(source: &str, target: &str) -> Result<f64, ConversionError> {
    let source_key = source.to_ascii_lowercase();
    let url = format!("{}/{}.json", RATE_API_BASE, source_key);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ConversionError::Network {
            detail: format!("request failed: {}", e),
        })?;

    if !response.ok() {
        return Err(ConversionError::Network {
            detail: format!("HTTP {}", response.status()),
        });
    }

    let document: RateDocument =
        response
            .json()
            .await
            .map_err(|e| ConversionError::MalformedResponse {
                detail: format!("failed to parse response: {}", e),
            })?;

    let table = document
        .rates_for(&source_key)
        .ok_or_else(|| ConversionError::MalformedResponse {
            detail: format!("source key \"{}\" missing from response", source_key),
        })?;

    table
        .rate(target)
        .ok_or_else(|| ConversionError::RateUnavailable {
            base: source.to_string(),
            target: target.to_string(),
        })
}
