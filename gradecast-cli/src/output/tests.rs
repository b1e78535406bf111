//! Tests for output formatting.

use gradecast_core::{CourseGrade, Grade, GradingPeriod, ReportCard, ReportOutcome};

use super::{JsonFormatter, TextFormatter};

fn sample_report() -> ReportCard {
    let mut card = ReportCard::new(GradingPeriod::from_label("MP2"));
    let mut math = CourseGrade::new("MTH203 - 1", "Algebra II");
    math.teacher = Some("Rivera, M.".to_string());
    math.grade = Grade::parse("91.2");
    card.courses.push(math);
    card.courses.push(CourseGrade::new("ART110 - 3", "Studio Art"));
    card
}

#[test]
fn test_text_success_lists_every_course() {
    let out = TextFormatter::new(false).format(&ReportOutcome::success(sample_report()));

    assert!(out.contains("Report card (MP2)"));
    assert!(out.contains("Algebra II"));
    assert!(out.contains("91.2"));
    assert!(out.contains("Studio Art"));
    assert!(out.contains("not posted"));
    assert!(out.contains("2 courses, 1 awaiting grades"));
}

#[test]
fn test_text_session_invalid_tells_user_to_sign_in() {
    let out = TextFormatter::new(false).format(&ReportOutcome::SessionInvalid);
    assert!(out.contains("Sign in"));
}

#[test]
fn test_text_failures_share_try_again_message_but_keep_detail() {
    let upstream = TextFormatter::new(false).format(&ReportOutcome::upstream("timed out"));
    let parse = TextFormatter::new(false).format(&ReportOutcome::parse_failure("no table"));

    // The end user cannot act on the distinction; operators read detail.
    assert!(upstream.contains("Try again later"));
    assert!(parse.contains("Try again later"));
    assert!(upstream.contains("timed out"));
    assert!(parse.contains("no table"));
}

#[test]
fn test_no_color_output_has_no_escape_codes() {
    let out = TextFormatter::new(false).format(&ReportOutcome::success(sample_report()));
    assert!(!out.contains('\x1b'));
}

#[test]
fn test_colored_output_resets() {
    let out = TextFormatter::new(true).format(&ReportOutcome::SessionInvalid);
    assert!(out.contains("\x1b[31m"));
    assert!(out.contains("\x1b[0m"));
}

#[test]
fn test_json_carries_status_tag() {
    let out = JsonFormatter::new(false)
        .format(&ReportOutcome::SessionInvalid)
        .unwrap();
    assert_eq!(out, r#"{"status":"session_invalid"}"#);
}

#[test]
fn test_json_pretty_is_multiline() {
    let out = JsonFormatter::new(true)
        .format(&ReportOutcome::success(sample_report()))
        .unwrap();
    assert!(out.contains('\n'));
    assert!(out.contains(r#""status": "success""#));
}
