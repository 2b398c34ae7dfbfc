//! Batch quoting over rows loaded from CSV

use serde::Serialize;

use quietcraft_domain::model::{Price, ServiceKind};
use quietcraft_domain::service::EventSink;

use super::quote_service::{QuoteOutcome, QuoteService};
use crate::batch::RawQuoteRow;

#[derive(Debug, Clone, Serialize)]
pub struct BatchLine {
    pub line: u64,
    pub service: String,
    pub weight: String,
    pub distance: String,
    pub price: Option<Price>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub lines: Vec<BatchLine>,
    pub quoted: usize,
    pub rejected: usize,
    pub total: Price,
}

impl BatchReport {
    /// Sum of quoted prices for one service
    pub fn total_for(&self, service: ServiceKind) -> f64 {
        self.lines
            .iter()
            .filter(|l| l.service == service.as_str())
            .filter_map(|l| l.price)
            .map(|p| p.amount())
            .sum()
    }
}

/// Quote every row independently; invalid rows are reported, not fatal
pub fn quote_rows<S: EventSink>(service: &mut QuoteService<S>, rows: &[RawQuoteRow]) -> BatchReport {
    let mut lines = Vec::with_capacity(rows.len());
    let mut total = 0.0;
    let mut quoted = 0;

    for row in rows {
        let outcome = service.calculate(&row.service, &row.weight, &row.distance);
        let (price, error) = match outcome {
            QuoteOutcome::Quoted(success) => {
                quoted += 1;
                total += success.price.amount();
                (Some(success.price), None)
            }
            QuoteOutcome::Rejected { error, .. } => {
                tracing::warn!(line = row.line, %error, "row rejected");
                (None, Some(error.to_string()))
            }
        };
        lines.push(BatchLine {
            line: row.line,
            service: row.service.clone(),
            weight: row.weight.clone(),
            distance: row.distance.clone(),
            price,
            error,
        });
    }

    BatchReport {
        rejected: lines.len() - quoted,
        lines,
        quoted,
        total: Price::from_raw(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::parse_quote_rows;
    use quietcraft_domain::model::AnalyticsEvent;

    #[test]
    fn test_batch_report_totals() {
        let rows = parse_quote_rows(
            "service,weight,distance\nstandard,10,20\nexpress,5,10\nstorage,0,5\novernight,5,5\nexpress,1,1\n",
        )
        .unwrap();
        let mut svc: QuoteService<Vec<AnalyticsEvent>> = QuoteService::new(Vec::new(), true);
        let report = quote_rows(&mut svc, &rows);

        assert_eq!(report.quoted, 3);
        assert_eq!(report.rejected, 2);
        // 62.50 + 75.00 + 53.00
        assert_eq!(report.total.amount(), 190.5);
        assert_eq!(report.total_for(ServiceKind::Express), 128.0);
        assert_eq!(report.lines[2].error.as_deref(), Some("Invalid input: weight must be positive"));
        assert_eq!(report.lines[3].line, 5);
        assert_eq!(svc.sink().len(), 3);
    }
}
