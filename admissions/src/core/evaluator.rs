//! The three-gate eligibility check.
//!
//! One pure predicate, shared by the primary eligibility decision and the
//! recommendation scan so the two policies cannot drift apart.

use crate::core::percentage::subset_mean;
use crate::core::rules::CourseRule;
use crate::core::types::Student;

/// True if `student` passes all three gates for `rule`:
///
/// 1. Exam gate: if the rule names an exam, the student must have sat that
///    exam and be marked qualified. Rules without an exam skip this gate.
/// 2. Subject-coverage gate: every required subject must appear in the
///    student's marks. Extra subjects are ignored.
/// 3. Cutoff gate: the mean over exactly the required subjects must reach
///    the cutoff. A cutoff of 0 is "not enforced" and always passes.
pub fn meets_rule(student: &Student, rule: &CourseRule) -> bool {
    if let Some(required) = rule.exam {
        if student.qualification.exam != Some(required) || !student.qualification.qualified {
            return false;
        }
    }

    // Coverage runs before the cutoff so subset_mean always sees a full set.
    let Some(pct) = subset_mean(&student.marks, rule.subjects) else {
        return false;
    };

    !(rule.cutoff > 0.0 && pct < rule.cutoff)
}

/// Eligibility of the student for their own desired course.
pub fn is_eligible(student: &Student) -> bool {
    meets_rule(student, &student.desired_course.rule())
}
