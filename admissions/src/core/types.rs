//! Shared deterministic types for the eligibility core.
//!
//! These types define stable contracts between core components. They are
//! constructed at the validation boundary and never mutated afterwards, so
//! every core function is a pure function of its inputs.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Student gender. Wire format uses the exact capitalized strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// National qualifying exam. The wire value `NONE` maps to `Option::None`,
/// not to a variant here, so "no exam" cannot be confused with a real exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exam {
    Jee,
    Neet,
}

impl Exam {
    pub fn as_str(self) -> &'static str {
        match self {
            Exam::Jee => "JEE",
            Exam::Neet => "NEET",
        }
    }
}

impl fmt::Display for Exam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exam qualification status as submitted by the student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualification {
    /// `None` means the student sat no qualifying exam.
    pub exam: Option<Exam>,
    pub qualified: bool,
}

/// The 19 course codes the rule table knows about.
///
/// Declaration order is the rule table's definition order; the
/// recommendation scan iterates [`Course::ALL`] and therefore reports
/// alternatives in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Course {
    Cse,
    Me,
    Ee,
    Civil,
    Ece,
    Mbbs,
    Bds,
    Bams,
    Bhms,
    Bpt,
    Bcom,
    Bba,
    Bbm,
    Ca,
    BaHistory,
    BaPsychology,
    BaSociety,
    BaPoliticalsci,
    BaEnglish,
}

impl Course {
    /// Every course, in rule-table definition order.
    pub const ALL: [Course; 19] = [
        Course::Cse,
        Course::Me,
        Course::Ee,
        Course::Civil,
        Course::Ece,
        Course::Mbbs,
        Course::Bds,
        Course::Bams,
        Course::Bhms,
        Course::Bpt,
        Course::Bcom,
        Course::Bba,
        Course::Bbm,
        Course::Ca,
        Course::BaHistory,
        Course::BaPsychology,
        Course::BaSociety,
        Course::BaPoliticalsci,
        Course::BaEnglish,
    ];

    /// Canonical uppercase code, identical to the serialized form.
    pub fn code(self) -> &'static str {
        match self {
            Course::Cse => "CSE",
            Course::Me => "ME",
            Course::Ee => "EE",
            Course::Civil => "CIVIL",
            Course::Ece => "ECE",
            Course::Mbbs => "MBBS",
            Course::Bds => "BDS",
            Course::Bams => "BAMS",
            Course::Bhms => "BHMS",
            Course::Bpt => "BPT",
            Course::Bcom => "BCOM",
            Course::Bba => "BBA",
            Course::Bbm => "BBM",
            Course::Ca => "CA",
            Course::BaHistory => "BA_HISTORY",
            Course::BaPsychology => "BA_PSYCHOLOGY",
            Course::BaSociety => "BA_SOCIETY",
            Course::BaPoliticalsci => "BA_POLITICALSCI",
            Course::BaEnglish => "BA_ENGLISH",
        }
    }

    /// Case-insensitive lookup by code. `None` for unknown codes.
    pub fn from_code(code: &str) -> Option<Course> {
        let upper = code.to_ascii_uppercase();
        Course::ALL.into_iter().find(|c| c.code() == upper)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A validated student record.
///
/// Only [`crate::validate::validate_student`] constructs one, so core logic
/// may assume every field already satisfies the input contract (at least 3
/// marks, scores in range, known course code).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    /// Subject name to score. BTreeMap keeps iteration deterministic.
    pub marks: BTreeMap<String, f64>,
    pub qualification: Qualification,
    pub desired_course: Course,
}

/// Outcome of a pure evaluation, before a request id is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub eligible: bool,
    /// Mean of ALL submitted marks, rounded to 2 decimals.
    pub percentage: f64,
    /// Present (possibly empty) only when `eligible` is false.
    pub recommended: Option<Vec<Course>>,
}
