//! Text output formatting with colors.

use gradecast_core::{CourseGrade, Grade, ReportCard, ReportOutcome};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Formats an outcome for terminal display.
    pub fn format(&self, outcome: &ReportOutcome) -> String {
        match outcome {
            ReportOutcome::Success { report } => self.format_report(report),
            ReportOutcome::SessionInvalid => format!(
                "{}\n",
                self.paint(
                    RED,
                    "Your portal session has expired. Sign in to Home Access Center again."
                )
            ),
            ReportOutcome::UpstreamError { detail } => {
                format!(
                    "{}\n{}\n",
                    self.paint(YELLOW, "The portal could not be reached. Try again later."),
                    self.paint(DIM, &format!("detail: {detail}"))
                )
            }
            ReportOutcome::ParseError { detail } => {
                format!(
                    "{}\n{}\n",
                    self.paint(
                        YELLOW,
                        "The portal answered in an unexpected format. Try again later."
                    ),
                    self.paint(DIM, &format!("detail: {detail}"))
                )
            }
        }
    }

    /// Formats a report card.
    fn format_report(&self, report: &ReportCard) -> String {
        let mut lines = Vec::new();

        lines.push(self.paint(
            BOLD,
            &format!("Report card ({})", report.grading_period.label),
        ));

        for course in &report.courses {
            lines.push(self.format_course(course));
            for assignment in &course.assignments {
                let score = match &assignment.score {
                    Some(grade) => self.format_grade(grade),
                    None => self.paint(DIM, "not graded"),
                };
                let points = assignment
                    .total_points
                    .map_or(String::new(), |p| format!(" / {p}"));
                lines.push(format!("    {:<30} {score}{points}", assignment.name));
            }
        }

        lines.push(self.paint(
            DIM,
            &format!(
                "{} courses, {} awaiting grades",
                report.courses.len(),
                report.ungraded_count()
            ),
        ));

        lines.join("\n") + "\n"
    }

    fn format_course(&self, course: &CourseGrade) -> String {
        let grade = match &course.grade {
            Some(grade) => self.format_grade(grade),
            None => self.paint(DIM, "not posted"),
        };
        let teacher = course.teacher.as_deref().unwrap_or("");
        format!("  {:<14} {:<28} {:<16} {grade}", course.course_id, course.name, teacher)
    }

    fn format_grade(&self, grade: &Grade) -> String {
        let text = grade.to_string();
        match grade {
            Grade::Numeric(value) if *value < 70.0 => self.paint(RED, &text),
            Grade::Numeric(value) if *value < 80.0 => self.paint(YELLOW, &text),
            Grade::Numeric(_) => self.paint(GREEN, &text),
            Grade::Letter(_) => self.paint(GREEN, &text),
        }
    }
}
