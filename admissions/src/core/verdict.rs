//! Pure evaluation pipeline: percentage, eligibility, recommendations.

use crate::core::evaluator::is_eligible;
use crate::core::percentage::{mean, round2};
use crate::core::recommender::recommend;
use crate::core::types::{Student, Verdict};

/// Evaluate one validated student record.
///
/// The reported percentage is the mean over ALL submitted marks, not the
/// desired course's subject subset. Recommendations are computed only when
/// the primary check fails; an eligible student gets `recommended: None`.
pub fn evaluate(student: &Student) -> Verdict {
    // Validation guarantees at least 3 marks; an empty map here is an
    // invariant break and must not turn into a quiet 0.00 response.
    let percentage = round2(mean(&student.marks).expect("validated student has marks"));

    let eligible = is_eligible(student);
    let recommended = if eligible {
        None
    } else {
        Some(recommend(student))
    };

    Verdict {
        eligible,
        percentage,
        recommended,
    }
}
