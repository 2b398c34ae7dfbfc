use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The two forms on the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Quote,
    Contact,
}

impl FormKind {
    /// `quote-form` is the quote form; every other id is treated as contact
    pub fn from_id(form_id: &str) -> Self {
        if form_id == "quote-form" {
            FormKind::Quote
        } else {
            FormKind::Contact
        }
    }

    /// Analytics label
    pub fn label(&self) -> &'static str {
        match self {
            FormKind::Quote => "Quote Form",
            FormKind::Contact => "Contact Form",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormKind::Quote => "Quote request submitted successfully! We'll contact you within 2 hours.",
            FormKind::Contact => "Message sent successfully! We'll get back to you soon.",
        }
    }

    /// Simulated round trip before the success toast
    pub fn submission_delay(&self) -> Duration {
        match self {
            FormKind::Quote => Duration::from_millis(2000),
            FormKind::Contact => Duration::from_millis(1500),
        }
    }
}

/// Input type of a form control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Select,
    Textarea,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
}

impl FormField {
    pub fn new(name: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: value.into(),
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_filled(&self) -> bool {
        !self.value.trim().is_empty()
    }
}
