//! Analytics event records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::form::FormKind;
use super::pricing::ServiceKind;
use super::quote::Price;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    pub label: Option<String>,
    pub value: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl AnalyticsEvent {
    pub fn new(category: impl Into<String>, action: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            label: None,
            value: None,
            timestamp: at,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn page_view(page: &str, at: DateTime<Utc>) -> Self {
        Self::new("Page", "View", at).with_label(page)
    }

    pub fn scroll_depth(milestone: u8, at: DateTime<Utc>) -> Self {
        Self::new("Engagement", "Scroll", at).with_label(format!("{}%", milestone))
    }

    pub fn form_start(form_id: &str, at: DateTime<Utc>) -> Self {
        Self::new("Form", "Start", at).with_label(FormKind::from_id(form_id).label())
    }

    pub fn form_submit(form_id: &str, at: DateTime<Utc>) -> Self {
        Self::new("Form", "Submit", at).with_label(FormKind::from_id(form_id).label())
    }

    pub fn button_click(text: &str, primary: bool, at: DateTime<Utc>) -> Self {
        let kind = if primary { "Primary CTA" } else { "Secondary Button" };
        Self::new("Button", "Click", at).with_label(format!("{}: {}", kind, text.trim()))
    }

    pub fn nav_click(text: &str, at: DateTime<Utc>) -> Self {
        Self::new("Navigation", "Click", at).with_label(text.trim())
    }

    pub fn phone_call(number: &str, at: DateTime<Utc>) -> Self {
        Self::new("Contact", "Phone Call Initiated", at).with_label(number)
    }

    pub fn quote_calculated(service: ServiceKind, price: Price, at: DateTime<Utc>) -> Self {
        Self::new("Calculator", "Quote Calculated", at)
            .with_label(service.as_str())
            .with_value(price.amount())
    }

    pub fn session_duration(page: &str, seconds: u64, at: DateTime<Utc>) -> Self {
        Self::new("Session", "Duration", at)
            .with_label(page)
            .with_value(seconds as f64)
    }

    pub fn session_interactions(page: &str, count: u64, at: DateTime<Utc>) -> Self {
        Self::new("Session", "Interactions", at)
            .with_label(page)
            .with_value(count as f64)
    }

    /// Navigation start to load end, in whole milliseconds
    pub fn page_load_time(page: &str, millis: f64, at: DateTime<Utc>) -> Self {
        Self::new("Performance", "Page Load Time", at)
            .with_label(page)
            .with_value(millis.round())
    }

    /// Largest contentful paint start time in milliseconds
    pub fn largest_contentful_paint(page: &str, start_ms: f64, at: DateTime<Utc>) -> Self {
        Self::new("Performance", "LCP", at)
            .with_label(page)
            .with_value(start_ms.round())
    }

    /// First input delay: processing start minus input time
    pub fn first_input_delay(page: &str, input_ms: f64, processing_start_ms: f64, at: DateTime<Utc>) -> Self {
        Self::new("Performance", "FID", at)
            .with_label(page)
            .with_value((processing_start_ms - input_ms).round())
    }

    pub fn script_error(message: &str, line: u32, at: DateTime<Utc>) -> Self {
        Self::new("Error", "JavaScript Error", at)
            .with_label(message)
            .with_value(f64::from(line))
    }
}
