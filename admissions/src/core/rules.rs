//! Static admission rule table.
//!
//! One rule per course: the subjects the course requires, a minimum
//! percentage over those subjects, and the qualifying exam (if any). The
//! table is compiled in, read-only, and shared freely across threads.

use crate::core::types::{Course, Exam};

/// Admission rule for one course.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseRule {
    /// Required subjects; always non-empty.
    pub subjects: &'static [&'static str],
    /// Minimum mean over `subjects`. `0.0` means no cutoff is enforced.
    pub cutoff: f64,
    /// Qualifying exam the student must have passed, if the course has one.
    pub exam: Option<Exam>,
}

const PCM: &[&str] = &["Physics", "Chemistry", "Mathematics"];
const PCB: &[&str] = &["Physics", "Chemistry", "Biology"];
const COMMERCE: &[&str] = &["Accountancy", "Business Studies", "Economics"];

impl Course {
    /// The rule governing admission to this course.
    pub fn rule(self) -> CourseRule {
        let (subjects, cutoff, exam): (&'static [&'static str], f64, Option<Exam>) = match self {
            Course::Cse => (PCM, 75.0, Some(Exam::Jee)),
            Course::Me => (PCM, 70.0, Some(Exam::Jee)),
            Course::Ee => (PCM, 70.0, Some(Exam::Jee)),
            Course::Civil => (PCM, 65.0, Some(Exam::Jee)),
            Course::Ece => (PCM, 70.0, Some(Exam::Jee)),
            Course::Mbbs => (PCB, 85.0, Some(Exam::Neet)),
            Course::Bds => (PCB, 80.0, Some(Exam::Neet)),
            Course::Bams => (PCB, 75.0, Some(Exam::Neet)),
            Course::Bhms => (PCB, 75.0, Some(Exam::Neet)),
            Course::Bpt => (PCB, 70.0, Some(Exam::Neet)),
            Course::Bcom => (COMMERCE, 0.0, None),
            Course::Bba => (COMMERCE, 0.0, None),
            Course::Bbm => (COMMERCE, 0.0, None),
            Course::Ca => (COMMERCE, 0.0, None),
            Course::BaHistory => (&["History", "Political Science", "Geography"], 0.0, None),
            Course::BaPsychology => (&["Psychology", "Sociology", "English"], 0.0, None),
            Course::BaSociety => (&["Sociology", "Political Science", "History"], 0.0, None),
            Course::BaPoliticalsci => (&["Political Science", "History", "Geography"], 0.0, None),
            Course::BaEnglish => (&["English", "History", "Political Science"], 0.0, None),
        };
        CourseRule {
            subjects,
            cutoff,
            exam,
        }
    }
}
