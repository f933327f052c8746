//! Alternative-course recommendations.

use crate::core::evaluator::meets_rule;
use crate::core::types::{Course, Student};

/// Every course whose rule the student's record passes, in rule-table
/// definition order.
///
/// The desired course is scanned like any other; it only ever shows up if
/// the same record would pass it, which a caller invoking this after a
/// failed primary check has already ruled out.
pub fn recommend(student: &Student) -> Vec<Course> {
    Course::ALL
        .into_iter()
        .filter(|course| meets_rule(student, &course.rule()))
        .collect()
}
