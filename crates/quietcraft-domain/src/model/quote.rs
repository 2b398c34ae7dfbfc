//! Quote request and price

use serde::{Deserialize, Serialize};

use quietcraft_types::{InvalidField, QuoteError};

use super::pricing::ServiceKind;

/// Validated calculator input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub service: ServiceKind,
    pub weight: f64,
    pub distance: f64,
}

impl QuoteRequest {
    /// Validate raw calculator values.
    ///
    /// Service is checked first, then weight, then distance. NaN and infinite
    /// amounts are rejected along with non-positive ones.
    pub fn new(service: &str, weight: f64, distance: f64) -> Result<Self, QuoteError> {
        let service: ServiceKind = service.parse()?;
        if !is_positive_amount(weight) {
            return Err(QuoteError::InvalidInput(InvalidField::Weight));
        }
        if !is_positive_amount(distance) {
            return Err(QuoteError::InvalidInput(InvalidField::Distance));
        }
        Ok(Self {
            service,
            weight,
            distance,
        })
    }
}

fn is_positive_amount(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

const CENT_ROUNDING_EPSILON: f64 = 1e-12;

/// Monetary amount rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Round half-up at the cent boundary.
    ///
    /// A decimal half cent such as 25.405 is stored as 25.404999...; the
    /// scaled value is nudged by a relative epsilon so it rounds the way the
    /// decimal number would.
    pub fn from_raw(amount: f64) -> Self {
        let cents = amount * 100.0;
        Price((cents + cents.abs() * CENT_ROUNDING_EPSILON).round() / 100.0)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
