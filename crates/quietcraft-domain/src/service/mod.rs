//! Domain services

pub mod analytics_tracker;
pub mod field_validator;
pub mod form_progress;
pub mod form_submission;
pub mod navigation;
pub mod phone;
pub mod price_animation;
pub mod quote_calculator;

pub use analytics_tracker::{EventSink, ScrollDepthTracker, SessionTracker};
pub use field_validator::{validate_field, validate_form, FieldValidation};
pub use form_progress::form_progress;
pub use form_submission::{contact_form_payload, quote_form_payload, submit_form, FieldEntry, FormPayload};
pub use quote_calculator::{compute_quote, quote};
