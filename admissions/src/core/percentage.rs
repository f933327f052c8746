//! Percentage math over subject marks.

use std::collections::BTreeMap;

/// Arithmetic mean of all submitted marks.
///
/// Divides by the number of entries given, nothing else; callers decide
/// which subset of subjects to pass in. Returns `None` for an empty map.
pub fn mean(marks: &BTreeMap<String, f64>) -> Option<f64> {
    if marks.is_empty() {
        return None;
    }
    Some(marks.values().sum::<f64>() / marks.len() as f64)
}

/// Mean over exactly `subjects`, read out of `marks`.
///
/// `None` if `subjects` is empty or any subject is missing from `marks`,
/// so a coverage failure can never be mistaken for a low score.
pub fn subset_mean(marks: &BTreeMap<String, f64>, subjects: &[&str]) -> Option<f64> {
    if subjects.is_empty() {
        return None;
    }
    let mut sum = 0.0;
    for subject in subjects {
        sum += marks.get(*subject)?;
    }
    Some(sum / subjects.len() as f64)
}

/// Round to 2 decimal places for the response contract.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
