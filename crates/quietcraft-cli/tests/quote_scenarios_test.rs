//! End-to-end calculator scenarios across the domain and app layers

use std::io::Write;

use chrono::{TimeZone, Utc};
use quietcraft_app::app::{quote_rows, QuoteService};
use quietcraft_app::batch::load_quote_rows;
use quietcraft_domain::model::{AnalyticsEvent, ServiceKind, PRICING_TABLE};
use quietcraft_domain::service::compute_quote;
use quietcraft_types::{InvalidField, QuoteError};
use tempfile::NamedTempFile;

fn amount(service: &str, weight: f64, distance: f64) -> f64 {
    compute_quote(service, weight, distance)
        .unwrap_or_else(|e| panic!("{service} {weight} {distance}: {e}"))
        .amount()
}

#[test]
fn test_reference_scenarios() {
    assert_eq!(amount("standard", 10.0, 20.0), 62.5);
    assert_eq!(amount("express", 5.0, 10.0), 75.0);
    assert_eq!(amount("same-day", 2.0, 1.0), 106.0);
    assert_eq!(
        compute_quote("storage", 0.0, 5.0),
        Err(QuoteError::InvalidInput(InvalidField::Weight))
    );
    assert_eq!(
        compute_quote("overnight", 5.0, 5.0),
        Err(QuoteError::InvalidInput(InvalidField::Service))
    );
}

#[test]
fn test_formula_over_a_grid_of_inputs() {
    let amounts = [0.5, 1.0, 3.25, 10.0, 120.0];
    for tier in PRICING_TABLE.iter() {
        for &weight in &amounts {
            for &distance in &amounts {
                let raw = tier.base_rate
                    + weight * tier.weight_multiplier
                    + distance * tier.distance_multiplier;
                let expected = (raw * 100.0).round() / 100.0;
                let got = amount(tier.service.as_str(), weight, distance);
                assert!(
                    (got - expected).abs() < 1e-9,
                    "{} w={weight} d={distance}: {got} != {expected}",
                    tier.service
                );
            }
        }
    }
}

#[test]
fn test_invalid_inputs_never_price() {
    for service in ["", "overnight", "STANDARD", "same day"] {
        assert!(compute_quote(service, 10.0, 10.0).is_err());
    }
    for kind in ServiceKind::ALL {
        for bad in [0.0, -0.0, -1.0, -250.5] {
            assert!(compute_quote(kind.as_str(), bad, 10.0).is_err());
            assert!(compute_quote(kind.as_str(), 10.0, bad).is_err());
        }
    }
}

#[test]
fn test_adapter_emits_one_event_per_quote() {
    let at = Utc.with_ymd_and_hms(2024, 7, 4, 10, 0, 0).unwrap();
    let mut service: QuoteService<Vec<AnalyticsEvent>> = QuoteService::new(Vec::new(), true);

    let ok = service.calculate_at("same-day", "2", "1", at);
    let rejected = service.calculate_at("same-day", "", "1", at);

    assert_eq!(ok.price().map(|p| p.amount()), Some(106.0));
    assert!(rejected.price().is_none());
    assert_eq!(service.sink().len(), 1);
    assert_eq!(service.sink()[0].timestamp, at);
}

#[test]
fn test_batch_file_end_to_end() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "service,weight,distance").unwrap();
    writeln!(file, "standard,10,20").unwrap();
    writeln!(file, "express,abc,10").unwrap();
    writeln!(file, "storage,2,4").unwrap();

    let rows = load_quote_rows(file.path()).unwrap();
    let mut service: QuoteService<Vec<AnalyticsEvent>> = QuoteService::new(Vec::new(), false);
    let report = quote_rows(&mut service, &rows);

    assert_eq!(report.quoted, 2);
    assert_eq!(report.rejected, 1);
    // 62.50 + (75 + 2.5 + 7.0)
    assert_eq!(report.total.amount(), 147.0);
    assert!(service.sink().is_empty());
}
