//! Output formatting module

use quietcraft_app::app::{BatchReport, QuoteSuccess};
use quietcraft_domain::model::{Notification, PRICING_TABLE};
use quietcraft_domain::service::FieldValidation;
use quietcraft_types::{OutputFormat, Result};

pub fn quote_json(success: &QuoteSuccess) -> Result<String> {
    Ok(serde_json::to_string_pretty(success)?)
}

pub fn output_quote(format: OutputFormat, success: &QuoteSuccess) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", quote_json(success)?);
        return Ok(());
    }

    let tier = success.service.tier();
    println!("\nQuote");
    println!("=====");
    println!("Service:         {}", success.service);
    println!("Weight:          {}", success.weight);
    println!("Distance:        {}", success.distance);
    println!("\n--- Breakdown ---");
    println!("Base rate:       {:>10.2}", tier.base_rate);
    println!(
        "Weight:          {:>10.2}  ({} x {})",
        success.weight * tier.weight_multiplier,
        success.weight,
        tier.weight_multiplier
    );
    println!(
        "Distance:        {:>10.2}  ({} x {})",
        success.distance * tier.distance_multiplier,
        success.distance,
        tier.distance_multiplier
    );
    println!("-----------------");
    println!("Price:           {:>10}", success.price.to_string());
    Ok(())
}

pub fn output_notification(notification: &Notification) {
    eprintln!("[{}] {}", notification.kind.label(), notification.message);
}

pub fn output_batch(format: OutputFormat, report: &BatchReport) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("{:<6} {:<10} {:>10} {:>10} {:>12}  Note", "Line", "Service", "Weight", "Distance", "Price");
    println!("{}", "-".repeat(64));
    for line in &report.lines {
        let price = line
            .price
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<6} {:<10} {:>10} {:>10} {:>12}  {}",
            line.line,
            truncate_str(&line.service, 10),
            truncate_str(&line.weight, 10),
            truncate_str(&line.distance, 10),
            price,
            line.error.as_deref().unwrap_or("")
        );
    }
    println!("{}", "-".repeat(64));
    println!("Quoted:   {}", report.quoted);
    println!("Rejected: {}", report.rejected);
    println!("Total:    {}", report.total);
    Ok(())
}

pub fn output_tiers(format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&PRICING_TABLE)?);
        return Ok(());
    }

    println!("{:<10} {:>10} {:>12} {:>14}", "Service", "Base", "Per weight", "Per distance");
    println!("{}", "-".repeat(49));
    for tier in PRICING_TABLE.iter() {
        println!(
            "{:<10} {:>10.2} {:>12.2} {:>14.2}",
            tier.service.as_str(), tier.base_rate, tier.weight_multiplier, tier.distance_multiplier
        );
    }
    Ok(())
}

pub fn output_validation(format: OutputFormat, value: &str, validation: &FieldValidation) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(validation)?);
        return Ok(());
    }

    match validation {
        FieldValidation::Skipped => println!("{:?}: empty optional field, nothing to check", value),
        FieldValidation::Valid => println!("{:?}: valid", value),
        FieldValidation::Invalid(msg) => println!("{:?}: {}", value, msg),
    }
    Ok(())
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quietcraft_app::app::QuoteService;
    use quietcraft_domain::model::AnalyticsEvent;

    #[test]
    fn test_quote_json_shape() {
        let mut service = QuoteService::new(Vec::<AnalyticsEvent>::new(), false);
        let success = service.calculate("standard", "10", "20").into_result().unwrap();
        let json: serde_json::Value = serde_json::from_str(&quote_json(&success).unwrap()).unwrap();

        assert_eq!(json["service"], "standard");
        assert_eq!(json["weight"], 10.0);
        assert_eq!(json["distance"], 20.0);
        assert_eq!(json["price"], 62.5);
        assert_eq!(json["notification"]["message"], "Quote calculated: $62.50");
        assert_eq!(json["notification"]["kind"], "success");
        assert_eq!(json["notification"]["duration"], 4000);
        assert!(json.get("frames").is_none());
    }

    #[test]
    fn test_validation_json_shape() {
        let invalid = serde_json::to_value(FieldValidation::Invalid("This field is required")).unwrap();
        assert_eq!(invalid["state"], "invalid");
        assert_eq!(invalid["message"], "This field is required");
        let valid = serde_json::to_value(FieldValidation::Valid).unwrap();
        assert_eq!(valid["state"], "valid");
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("standard", 10), "standard");
        assert_eq!(truncate_str("a-very-long-service", 10), "a-very-l..");
    }
}
