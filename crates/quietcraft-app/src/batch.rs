//! CSV loader for batch quoting
//!
//! Expected columns: service, weight, distance. A header row is optional.

use std::path::Path;

use quietcraft_types::{Error, Result};

/// One calculator submission as read from a file, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawQuoteRow {
    /// 1-based line number in the source file
    pub line: u64,
    pub service: String,
    pub weight: String,
    pub distance: String,
}

pub fn load_quote_rows(path: &Path) -> Result<Vec<RawQuoteRow>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    read_rows(reader)
}

pub fn parse_quote_rows(content: &str) -> Result<Vec<RawQuoteRow>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());
    read_rows(reader)
}

fn read_rows<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<RawQuoteRow>> {
    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 1);
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        if index == 0 && is_header(&record) {
            continue;
        }
        let field = |i: usize| record.get(i).unwrap_or("").to_string();
        rows.push(RawQuoteRow {
            line,
            service: field(0),
            weight: field(1),
            distance: field(2),
        });
    }
    tracing::debug!(rows = rows.len(), "quote rows loaded");
    Ok(rows)
}

fn is_header(record: &csv::StringRecord) -> bool {
    record.iter().any(|h| {
        let h = h.to_lowercase();
        h == "service" || h == "weight" || h == "distance"
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_with_header() {
        let rows = parse_quote_rows("service,weight,distance\nstandard,10,20\nexpress, 5 ,10\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].service, "standard");
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[1].weight, "5");
    }

    #[test]
    fn test_parse_without_header_and_short_rows() {
        let rows = parse_quote_rows("same-day,2,1\n\nstorage,3\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].service, "same-day");
        assert_eq!(rows[1].distance, "");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "express,5,10").unwrap();
        writeln!(file, "overnight,5,5").unwrap();
        let rows = load_quote_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].service, "overnight");
    }

    #[test]
    fn test_missing_file() {
        let err = load_quote_rows(Path::new("/nonexistent/quotes.csv")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
