//! HTML parsing for HAC pages.
//!
//! The portal's markup is undocumented and changes without notice, so
//! everything that touches it lives here behind a narrow interface.
//! Parsing is strict about the course/grade shape (a row missing cells
//! is an error, not a guess) and lenient about everything the portal is
//! known to vary (attribute noise, empty grade cells, cell whitespace).
//!
//! Expected shapes, from eSchoolPLUS deployments:
//!
//! - Report cards: `table#plnMain_dgReportCard`, one
//!   `tr.sg-asp-table-data-row` per course with cells
//!   `[course id, description, teacher, ..., grade]`; the grading period
//!   is the selected option of `select#plnMain_ddlRCRuns`.
//! - Classwork: one `div.AssignmentClass` per course with an
//!   `a.sg-header-heading` ("`COURSE - N : Name`") and a
//!   `table.sg-asp-table` of assignment rows
//!   `[due date, assignment, category, score, total points]`.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;
use tracing::debug;

use gradecast_core::{Assignment, CourseGrade, Grade, GradingPeriod, ReportCard};

use crate::error::HacError;

// ============================================================================
// Cached selectors
// ============================================================================

struct Selectors {
    report_table: Selector,
    data_row: Selector,
    cell: Selector,
    period_option: Selector,
    course_section: Selector,
    course_heading: Selector,
    assignment_table: Selector,
}

fn selectors() -> &'static Selectors {
    static SELECTORS: OnceLock<Selectors> = OnceLock::new();
    SELECTORS.get_or_init(|| Selectors {
        report_table: Selector::parse("table#plnMain_dgReportCard").expect("static selector"),
        data_row: Selector::parse("tr.sg-asp-table-data-row").expect("static selector"),
        cell: Selector::parse("td").expect("static selector"),
        period_option: Selector::parse("select#plnMain_ddlRCRuns option[selected]")
            .expect("static selector"),
        course_section: Selector::parse("div.AssignmentClass").expect("static selector"),
        course_heading: Selector::parse("a.sg-header-heading").expect("static selector"),
        assignment_table: Selector::parse("table.sg-asp-table").expect("static selector"),
    })
}

/// Splits a classwork heading like "MTH203 - 1 : Algebra II".
fn heading_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(?P<id>.+?)\s*:\s*(?P<name>.+?)\s*$").expect("static regex"))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

// ============================================================================
// Report card page
// ============================================================================

/// Parses the report-card page into a [`ReportCard`].
///
/// Every course row present upstream ends up in the result; a course
/// with an empty grade cell carries `grade: None` rather than being
/// dropped or zeroed.
///
/// # Errors
///
/// Returns `HacError::Parse` when the course table is missing or a row
/// does not carry the expected cells.
pub fn parse_report_card(html: &str) -> Result<ReportCard, HacError> {
    debug!(len = html.len(), "Parsing report card page");

    let document = Html::parse_document(html);
    let sel = selectors();

    let table = document
        .select(&sel.report_table)
        .next()
        .ok_or_else(|| HacError::Parse("report card table not found".to_string()))?;

    let grading_period = document
        .select(&sel.period_option)
        .next()
        .map_or_else(
            || GradingPeriod::from_label("Current"),
            |option| GradingPeriod::from_label(cell_text(option)),
        );

    let mut card = ReportCard::new(grading_period);

    for (index, row) in table.select(&sel.data_row).enumerate() {
        let cells: Vec<String> = row.select(&sel.cell).map(cell_text).collect();
        if cells.len() < 4 {
            return Err(HacError::Parse(format!(
                "course row {index} has {} cells, expected at least 4",
                cells.len()
            )));
        }

        let mut course = CourseGrade::new(cells[0].clone(), cells[1].clone());
        if !cells[2].is_empty() {
            course.teacher = Some(cells[2].clone());
        }
        // The grade for the selected run is the trailing cell; districts
        // insert varying columns (room, credit) between teacher and grade.
        course.grade = Grade::parse(cells.last().map_or("", String::as_str));

        card.courses.push(course);
    }

    debug!(
        courses = card.courses.len(),
        graded = card.graded_count(),
        "Parsed report card"
    );
    Ok(card)
}

// ============================================================================
// Classwork page
// ============================================================================

/// Parses the classwork page into a [`ReportCard`] whose courses carry
/// their per-assignment breakdown.
///
/// # Errors
///
/// Returns `HacError::Parse` when no course sections are present or an
/// assignment row does not carry the expected cells.
pub fn parse_classwork(html: &str) -> Result<ReportCard, HacError> {
    debug!(len = html.len(), "Parsing classwork page");

    let document = Html::parse_document(html);
    let sel = selectors();

    let sections: Vec<_> = document.select(&sel.course_section).collect();
    if sections.is_empty() {
        return Err(HacError::Parse("no course sections found".to_string()));
    }

    let grading_period = document
        .select(&sel.period_option)
        .next()
        .map_or_else(
            || GradingPeriod::from_label("Current"),
            |option| GradingPeriod::from_label(cell_text(option)),
        );

    let mut card = ReportCard::new(grading_period);

    for section in sections {
        let heading = section
            .select(&sel.course_heading)
            .next()
            .map(cell_text)
            .ok_or_else(|| HacError::Parse("course section without heading".to_string()))?;

        let (course_id, name) = match heading_regex().captures(&heading) {
            Some(caps) => (caps["id"].to_string(), caps["name"].to_string()),
            // Some districts omit the "id : name" form entirely.
            None => (heading.clone(), heading.clone()),
        };
        let mut course = CourseGrade::new(course_id, name);

        if let Some(table) = section.select(&sel.assignment_table).next() {
            for (index, row) in table.select(&sel.data_row).enumerate() {
                let cells: Vec<String> = row.select(&sel.cell).map(cell_text).collect();
                if cells.len() < 5 {
                    return Err(HacError::Parse(format!(
                        "assignment row {index} in {} has {} cells, expected at least 5",
                        course.course_id,
                        cells.len()
                    )));
                }

                course.assignments.push(Assignment {
                    name: cells[1].clone(),
                    category: (!cells[2].is_empty()).then(|| cells[2].clone()),
                    due_date: (!cells[0].is_empty()).then(|| cells[0].clone()),
                    score: Grade::parse(&cells[3]),
                    total_points: cells[4].parse().ok(),
                });
            }
        }

        card.courses.push(course);
    }

    debug!(courses = card.courses.len(), "Parsed classwork");
    Ok(card)
}

// ============================================================================
// Tests
// ============================================================================
