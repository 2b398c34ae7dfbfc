//! Quote calculator adapter
//!
//! Takes the raw values a calculator form would hold, runs the pricing core,
//! and returns everything the UI shows: the price, the toast, and the
//! count-up frames. Successful quotes are reported to the analytics sink.

use chrono::{DateTime, Utc};
use serde::Serialize;

use quietcraft_domain::model::{AnalyticsEvent, Notification, Price, QuoteRequest, ServiceKind};
use quietcraft_domain::service::price_animation::count_up_frames;
use quietcraft_domain::service::{quote, EventSink};
use quietcraft_types::QuoteError;

pub const MSG_INCOMPLETE: &str = "Please fill all calculator fields";
const WARNING_DURATION_MS: u64 = 3000;
const SUCCESS_DURATION_MS: u64 = 4000;

/// Successful calculator run
#[derive(Debug, Clone, Serialize)]
pub struct QuoteSuccess {
    pub service: ServiceKind,
    pub weight: f64,
    pub distance: f64,
    pub price: Price,
    pub notification: Notification,
    #[serde(skip)]
    pub frames: Vec<f64>,
}

/// Result of one calculator run as seen by the UI
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum QuoteOutcome {
    Quoted(QuoteSuccess),
    Rejected {
        #[serde(serialize_with = "serialize_error")]
        error: QuoteError,
        notification: Notification,
    },
}

fn serialize_error<S: serde::Serializer>(error: &QuoteError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

impl QuoteOutcome {
    pub fn notification(&self) -> &Notification {
        match self {
            QuoteOutcome::Quoted(success) => &success.notification,
            QuoteOutcome::Rejected { notification, .. } => notification,
        }
    }

    pub fn price(&self) -> Option<Price> {
        match self {
            QuoteOutcome::Quoted(success) => Some(success.price),
            QuoteOutcome::Rejected { .. } => None,
        }
    }

    pub fn into_result(self) -> Result<QuoteSuccess, QuoteError> {
        match self {
            QuoteOutcome::Quoted(success) => Ok(success),
            QuoteOutcome::Rejected { error, .. } => Err(error),
        }
    }
}

/// Parse a numeric form value the way a browser reads a number field: an
/// optional sign, then `Infinity` or the longest leading decimal number with
/// an optional exponent. Anything unparseable is 0.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = if rest.starts_with("Infinity") {
        f64::INFINITY
    } else {
        match leading_number_len(rest.as_bytes()) {
            Some(len) => rest[..len].parse().unwrap_or(0.0),
            None => return 0.0,
        }
    };

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Length of the leading `digits[.digits][e[+-]digits]` run, or `None`
/// when no mantissa digit is present. A dangling exponent marker is left out.
fn leading_number_len(bytes: &[u8]) -> Option<usize> {
    let skip_digits = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = skip_digits(0);
    let mut mantissa_digits = end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = skip_digits(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }
    Some(end)
}

/// Whether every calculator input holds something, so a change can
/// trigger an automatic recalculation
pub fn is_calculator_complete(service: &str, weight: &str, distance: &str) -> bool {
    !service.is_empty() && !weight.is_empty() && !distance.is_empty()
}

pub struct QuoteService<S: EventSink> {
    sink: S,
    analytics_enabled: bool,
}

impl<S: EventSink> QuoteService<S> {
    pub fn new(sink: S, analytics_enabled: bool) -> Self {
        Self {
            sink,
            analytics_enabled,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run the calculator on raw form values
    pub fn calculate(&mut self, service: &str, raw_weight: &str, raw_distance: &str) -> QuoteOutcome {
        self.calculate_at(service, raw_weight, raw_distance, Utc::now())
    }

    pub fn calculate_at(
        &mut self,
        service: &str,
        raw_weight: &str,
        raw_distance: &str,
        at: DateTime<Utc>,
    ) -> QuoteOutcome {
        let weight = parse_amount(raw_weight);
        let distance = parse_amount(raw_distance);

        let request = match QuoteRequest::new(service, weight, distance) {
            Ok(request) => request,
            Err(error) => {
                tracing::debug!(service, weight, distance, %error, "quote rejected");
                return QuoteOutcome::Rejected {
                    error,
                    notification: Notification::warning(MSG_INCOMPLETE)
                        .with_duration_ms(WARNING_DURATION_MS),
                };
            }
        };

        let price = quote(&request);
        tracing::debug!(service = %request.service, weight, distance, price = price.amount(), "quote calculated");

        if self.analytics_enabled {
            self.sink
                .record(AnalyticsEvent::quote_calculated(request.service, price, at));
        }

        QuoteOutcome::Quoted(QuoteSuccess {
            service: request.service,
            weight,
            distance,
            price,
            notification: Notification::success(format!("Quote calculated: {}", price))
                .with_duration_ms(SUCCESS_DURATION_MS),
            frames: count_up_frames(price.amount()),
        })
    }
}
