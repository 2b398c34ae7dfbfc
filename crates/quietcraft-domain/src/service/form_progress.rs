use crate::model::FormField;

/// Percentage of required fields that have a non-blank value.
///
/// A form without required fields reports 0.
pub fn form_progress(fields: &[FormField]) -> f64 {
    let required: Vec<&FormField> = fields.iter().filter(|f| f.required).collect();
    if required.is_empty() {
        return 0.0;
    }
    let filled = required.iter().filter(|f| f.is_filled()).count();
    (filled as f64 / required.len() as f64) * 100.0
}
