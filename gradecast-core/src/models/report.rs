//! Report card, course, and assignment types.
//!
//! The portal's markup is an unstable external contract, so these types
//! are deliberately lenient: every field the portal may omit is optional,
//! and an ungraded course is represented with an explicit `None` rather
//! than being dropped or defaulted.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Grade
// ============================================================================

/// A posted grade value.
///
/// HAC districts post either numeric averages ("92.35") or letter grades
/// ("A-", "P"), sometimes both across different courses in one report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    /// Numeric average as posted.
    Numeric(f64),
    /// Letter or mark as posted.
    Letter(String),
}

impl Grade {
    /// Parses a grade cell as posted by the portal.
    ///
    /// Returns `None` for an empty or whitespace-only cell, which is how
    /// the portal renders a course with no grade posted yet.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Some(Self::Numeric(value)),
            Err(_) => Some(Self::Letter(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Letter(letter) => write!(f, "{letter}"),
        }
    }
}

// ============================================================================
// Grading Period
// ============================================================================

/// The grading period a report covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingPeriod {
    /// Period label as shown by the portal (e.g. "MP2", "Q3").
    pub label: String,
    /// One-based ordinal when the label carries one.
    pub ordinal: Option<u8>,
}

impl GradingPeriod {
    /// Creates a grading period from a portal label, extracting the
    /// first embedded ordinal when present.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        let ordinal = label
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(char::is_ascii_digit)
            .collect::<String>()
            .parse()
            .ok();
        Self { label, ordinal }
    }
}

// ============================================================================
// Course Grade
// ============================================================================

/// One course entry in a report card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseGrade {
    /// Course identifier as listed by the portal (e.g. "MTH203 - 1").
    pub course_id: String,
    /// Course display name.
    pub name: String,
    /// Assigned teacher, when listed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    /// Posted grade. `None` means no grade has been posted yet; the
    /// course is still present in the report.
    pub grade: Option<Grade>,
    /// Per-assignment breakdown, when the fetched resource exposes one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignments: Vec<Assignment>,
}

impl CourseGrade {
    /// Creates a course entry with no grade posted and no breakdown.
    pub fn new(course_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            name: name.into(),
            teacher: None,
            grade: None,
            assignments: Vec::new(),
        }
    }

    /// Returns true if a grade has been posted for this course.
    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }
}

// ============================================================================
// Assignment
// ============================================================================

/// One assignment in a course's breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assignment name.
    pub name: String,
    /// Category as listed (e.g. "Homework", "Test").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Due date string as shown by the portal. Districts format dates
    /// inconsistently, so no date parsing is attempted here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Earned score, `None` when not yet graded.
    pub score: Option<Grade>,
    /// Total points possible, when listed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_points: Option<f64>,
}

// ============================================================================
// Report Card
// ============================================================================

/// The structured result of a successful fetch.
///
/// Produced fresh on every fetch; never cached or mutated. Course order
/// matches the upstream listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportCard {
    /// Grading period this report covers.
    pub grading_period: GradingPeriod,
    /// Every course present in the upstream listing, in listing order.
    pub courses: Vec<CourseGrade>,
}

impl ReportCard {
    /// Creates a report card for the given period.
    pub fn new(grading_period: GradingPeriod) -> Self {
        Self {
            grading_period,
            courses: Vec::new(),
        }
    }

    /// Number of courses with a posted grade.
    pub fn graded_count(&self) -> usize {
        self.courses.iter().filter(|c| c.is_graded()).count()
    }

    /// Number of courses still awaiting a grade.
    pub fn ungraded_count(&self) -> usize {
        self.courses.len() - self.graded_count()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_parse_numeric() {
        assert_eq!(Grade::parse("92.35"), Some(Grade::Numeric(92.35)));
        assert_eq!(Grade::parse(" 100 "), Some(Grade::Numeric(100.0)));
    }

    #[test]
    fn test_grade_parse_letter() {
        assert_eq!(Grade::parse("A-"), Some(Grade::Letter("A-".to_string())));
        assert_eq!(Grade::parse("P"), Some(Grade::Letter("P".to_string())));
    }

    #[test]
    fn test_grade_parse_empty_is_none() {
        assert_eq!(Grade::parse(""), None);
        assert_eq!(Grade::parse("   "), None);
    }

    #[test]
    fn test_grading_period_ordinal() {
        let period = GradingPeriod::from_label("MP2");
        assert_eq!(period.ordinal, Some(2));

        let period = GradingPeriod::from_label("Semester");
        assert_eq!(period.ordinal, None);
    }

    #[test]
    fn test_grading_period_ordinal_with_trailing_text() {
        // Some districts label runs like "Run 2 (Fall)".
        let period = GradingPeriod::from_label("Run 2 (Fall)");
        assert_eq!(period.ordinal, Some(2));

        let period = GradingPeriod::from_label("Marking Period 3 - Ends 03/24");
        assert_eq!(period.ordinal, Some(3));
    }

    #[test]
    fn test_course_counts() {
        let mut card = ReportCard::new(GradingPeriod::from_label("MP1"));
        let mut math = CourseGrade::new("MTH203 - 1", "Algebra II");
        math.grade = Grade::parse("91.2");
        card.courses.push(math);
        card.courses.push(CourseGrade::new("ART101 - 3", "Studio Art"));

        assert_eq!(card.graded_count(), 1);
        assert_eq!(card.ungraded_count(), 1);
    }

    #[test]
    fn test_course_serde_round_trip() {
        let mut course = CourseGrade::new("SCI301 - 2", "Chemistry");
        course.teacher = Some("Rivera, M.".to_string());
        course.grade = Grade::parse("B+");

        let json = serde_json::to_string(&course).unwrap();
        let back: CourseGrade = serde_json::from_str(&json).unwrap();
        assert_eq!(course, back);
    }
}
