//! Analytics sink backed by structured logging

use quietcraft_domain::model::AnalyticsEvent;
use quietcraft_domain::service::EventSink;

/// Writes each event as a `tracing` record under the `analytics` target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&mut self, event: AnalyticsEvent) {
        tracing::info!(
            target: "analytics",
            category = %event.category,
            action = %event.action,
            label = event.label.as_deref().unwrap_or(""),
            value = event.value,
            timestamp = %event.timestamp.to_rfc3339(),
            "Analytics event"
        );
    }
}
