//! Use cases

pub mod batch_quote;
pub mod quote_service;

pub use batch_quote::{quote_rows, BatchLine, BatchReport};
pub use quote_service::{is_calculator_complete, parse_amount, QuoteOutcome, QuoteService, QuoteSuccess};
