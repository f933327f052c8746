//! Field-level validation of untrusted request input.
//!
//! [`RawStudent`] is the wire shape; [`validate_student`] either produces a
//! [`Student`] the core can trust or reports exactly which field violated
//! which constraint. Core logic never sees unvalidated data.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::{Course, Exam, Gender, Qualification, Student};

/// Qualification block as submitted, before exam normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawQualification {
    pub exam: String,
    pub qualified: bool,
}

/// Student record as submitted over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStudent {
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub marks: BTreeMap<String, f64>,
    pub qualification: RawQualification,
    pub desired_course: String,
}

/// A single field constraint violation. `Display` names the field and the
/// rule so the message can be returned to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("name must be non-empty and contain only letters and spaces")]
    InvalidName,
    #[error("age must be between 17 and 25, got {0}")]
    AgeOutOfRange(i64),
    #[error("gender must be 'Male', 'Female', or 'Other', got '{0}'")]
    UnknownGender(String),
    #[error("marks for '{subject}' must be between 0 and 100, got {score}")]
    MarkOutOfRange { subject: String, score: f64 },
    #[error("at least 3 subjects are required, got {0}")]
    TooFewSubjects(usize),
    #[error("qualification.exam must be 'JEE', 'NEET', or 'NONE', got '{0}'")]
    UnknownExam(String),
    #[error("desired_course '{0}' is not a known course code")]
    UnknownCourse(String),
}

static NAME_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[A-Za-z ]+$").expect("static regex"));

/// Check every field constraint and build the validated record.
///
/// Normalizations applied on success: name trimmed, exam and course codes
/// uppercased into their enums.
pub fn validate_student(raw: &RawStudent) -> Result<Student, ValidationError> {
    let name = raw.name.trim();
    if name.is_empty() || !NAME_RE.is_match(&raw.name) {
        return Err(ValidationError::InvalidName);
    }

    if !(17..=25).contains(&raw.age) {
        return Err(ValidationError::AgeOutOfRange(raw.age));
    }
    let age = raw.age as u8;

    let gender = match raw.gender.as_str() {
        "Male" => Gender::Male,
        "Female" => Gender::Female,
        "Other" => Gender::Other,
        other => return Err(ValidationError::UnknownGender(other.to_string())),
    };

    for (subject, score) in &raw.marks {
        if !(0.0..=100.0).contains(score) {
            return Err(ValidationError::MarkOutOfRange {
                subject: subject.clone(),
                score: *score,
            });
        }
    }
    if raw.marks.len() < 3 {
        return Err(ValidationError::TooFewSubjects(raw.marks.len()));
    }

    let exam = parse_exam(&raw.qualification.exam)?;

    let desired_course = Course::from_code(&raw.desired_course)
        .ok_or_else(|| ValidationError::UnknownCourse(raw.desired_course.clone()))?;

    Ok(Student {
        name: name.to_string(),
        age,
        gender,
        marks: raw.marks.clone(),
        qualification: Qualification {
            exam,
            qualified: raw.qualification.qualified,
        },
        desired_course,
    })
}

/// Case-insensitive exam parse; the literal `NONE` means no exam was taken.
fn parse_exam(code: &str) -> Result<Option<Exam>, ValidationError> {
    match code.to_ascii_uppercase().as_str() {
        "JEE" => Ok(Some(Exam::Jee)),
        "NEET" => Ok(Some(Exam::Neet)),
        "NONE" => Ok(None),
        _ => Err(ValidationError::UnknownExam(code.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawStudent {
        RawStudent {
            name: "Ravi Kumar".to_string(),
            age: 18,
            gender: "Male".to_string(),
            marks: [
                ("Physics".to_string(), 80.0),
                ("Chemistry".to_string(), 80.0),
                ("Mathematics".to_string(), 80.0),
            ]
            .into_iter()
            .collect(),
            qualification: RawQualification {
                exam: "jee".to_string(),
                qualified: true,
            },
            desired_course: "cse".to_string(),
        }
    }

    #[test]
    fn valid_input_is_normalized() {
        let student = validate_student(&raw()).expect("valid student");
        assert_eq!(student.qualification.exam, Some(Exam::Jee));
        assert_eq!(student.desired_course, Course::Cse);
    }

    #[test]
    fn name_rejects_digits_and_empty() {
        let mut r = raw();
        r.name = "R2D2".to_string();
        assert_eq!(validate_student(&r), Err(ValidationError::InvalidName));
        r.name = "   ".to_string();
        assert_eq!(validate_student(&r), Err(ValidationError::InvalidName));
    }

    #[test]
    fn age_bounds_are_inclusive() {
        let mut r = raw();
        r.age = 17;
        assert!(validate_student(&r).is_ok());
        r.age = 25;
        assert!(validate_student(&r).is_ok());
        r.age = 16;
        assert_eq!(validate_student(&r), Err(ValidationError::AgeOutOfRange(16)));
        r.age = 26;
        assert_eq!(validate_student(&r), Err(ValidationError::AgeOutOfRange(26)));
    }

    #[test]
    fn gender_is_exact_match_only() {
        let mut r = raw();
        r.gender = "male".to_string();
        assert_eq!(
            validate_student(&r),
            Err(ValidationError::UnknownGender("male".to_string()))
        );
    }

    #[test]
    fn marks_must_have_three_in_range_entries() {
        let mut r = raw();
        r.marks.remove("Mathematics");
        assert_eq!(validate_student(&r), Err(ValidationError::TooFewSubjects(2)));

        let mut r = raw();
        r.marks.insert("Physics".to_string(), 101.0);
        assert_eq!(
            validate_student(&r),
            Err(ValidationError::MarkOutOfRange {
                subject: "Physics".to_string(),
                score: 101.0
            })
        );
    }

    #[test]
    fn exam_none_maps_to_no_exam() {
        let mut r = raw();
        r.qualification.exam = "None".to_string();
        let student = validate_student(&r).expect("valid student");
        assert_eq!(student.qualification.exam, None);

        r.qualification.exam = "GATE".to_string();
        assert_eq!(
            validate_student(&r),
            Err(ValidationError::UnknownExam("GATE".to_string()))
        );
    }

    #[test]
    fn unknown_course_is_rejected() {
        let mut r = raw();
        r.desired_course = "BTECH".to_string();
        assert_eq!(
            validate_student(&r),
            Err(ValidationError::UnknownCourse("BTECH".to_string()))
        );
    }
}
