//! Service tiers and the fixed pricing table

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use quietcraft_types::{InvalidField, QuoteError};

/// Delivery or storage option offered by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    Standard,
    Express,
    SameDay,
    Storage,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::Standard,
        ServiceKind::Express,
        ServiceKind::SameDay,
        ServiceKind::Storage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Standard => "standard",
            ServiceKind::Express => "express",
            ServiceKind::SameDay => "same-day",
            ServiceKind::Storage => "storage",
        }
    }

    /// Pricing coefficients for this service
    pub fn tier(&self) -> &'static PricingTier {
        match self {
            ServiceKind::Standard => &PRICING_TABLE[0],
            ServiceKind::Express => &PRICING_TABLE[1],
            ServiceKind::SameDay => &PRICING_TABLE[2],
            ServiceKind::Storage => &PRICING_TABLE[3],
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or(QuoteError::InvalidInput(InvalidField::Service))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingTier {
    pub service: ServiceKind,
    /// Flat fee
    pub base_rate: f64,
    /// Cost per unit weight
    pub weight_multiplier: f64,
    /// Cost per unit distance
    pub distance_multiplier: f64,
}

/// One entry per `ServiceKind`, in `ServiceKind::ALL` order
pub const PRICING_TABLE: [PricingTier; 4] = [
    PricingTier {
        service: ServiceKind::Standard,
        base_rate: 25.0,
        weight_multiplier: 0.75,
        distance_multiplier: 1.5,
    },
    PricingTier {
        service: ServiceKind::Express,
        base_rate: 50.0,
        weight_multiplier: 1.0,
        distance_multiplier: 2.0,
    },
    PricingTier {
        service: ServiceKind::SameDay,
        base_rate: 100.0,
        weight_multiplier: 1.5,
        distance_multiplier: 3.0,
    },
    PricingTier {
        service: ServiceKind::Storage,
        base_rate: 75.0,
        weight_multiplier: 1.25,
        distance_multiplier: 1.75,
    },
];
