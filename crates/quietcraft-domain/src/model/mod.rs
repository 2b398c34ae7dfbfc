//! Domain model types

pub mod analytics;
pub mod form;
pub mod notification;
pub mod pricing;
pub mod quote;

pub use analytics::AnalyticsEvent;
pub use form::{FieldKind, FormField, FormKind};
pub use notification::{Notification, NotificationKind};
pub use pricing::{PricingTier, ServiceKind, PRICING_TABLE};
pub use quote::{Price, QuoteRequest};
