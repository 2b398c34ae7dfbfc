//! Quote price calculation

use quietcraft_types::QuoteError;

use crate::model::{Price, PricingTier, QuoteRequest};

/// Price a calculator submission.
///
/// Fails with `QuoteError::InvalidInput` when the service is unknown or
/// either amount is not a positive number. Nothing is computed on failure.
///
/// # Formula
/// price = base_rate + weight x weight_multiplier + distance x distance_multiplier
pub fn compute_quote(service: &str, weight: f64, distance: f64) -> Result<Price, QuoteError> {
    let request = QuoteRequest::new(service, weight, distance)?;
    Ok(quote(&request))
}

/// Price an already validated request
pub fn quote(request: &QuoteRequest) -> Price {
    Price::from_raw(calculate_raw_price(
        request.service.tier(),
        request.weight,
        request.distance,
    ))
}

pub fn calculate_raw_price(tier: &PricingTier, weight: f64, distance: f64) -> f64 {
    tier.base_rate + weight * tier.weight_multiplier + distance * tier.distance_multiplier
}
