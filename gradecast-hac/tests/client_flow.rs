//! End-to-end client flow against a mocked portal.
//!
//! These tests pin the behavior request handlers rely on: when upstream
//! calls happen, when they are skipped, and which outcome each upstream
//! behavior classifies into.

use std::time::{Duration, Instant};

use gradecast_core::{CoreError, GradePortal, ReportOutcome, SessionToken};
use gradecast_hac::HacClient;

const PROBE: &str = "/HomeAccess/Home/WeekView.aspx";
const REPORT: &str = "/HomeAccess/Content/Student/ReportCards.aspx";
const CLASSWORK: &str = "/HomeAccess/Content/Student/Assignments.aspx";

const REPORT_PAGE: &str = r#"
    <html><body>
    <select id="plnMain_ddlRCRuns">
        <option value="2" selected="selected">MP2</option>
    </select>
    <table id="plnMain_dgReportCard">
        <tr class="sg-asp-table-data-row">
            <td>MTH203 - 1</td><td>Algebra II</td><td>Rivera, M.</td><td>91.2</td>
        </tr>
        <tr class="sg-asp-table-data-row">
            <td>ENG101 - 4</td><td>English I</td><td>Okafor, C.</td><td>A-</td>
        </tr>
        <tr class="sg-asp-table-data-row">
            <td>ART110 - 3</td><td>Studio Art</td><td>Nguyen, T.</td><td></td>
        </tr>
        <tr class="sg-asp-table-data-row">
            <td>PE100 - 7</td><td>Physical Education</td><td>Brooks, J.</td><td> </td>
        </tr>
    </table>
    </body></html>"#;

#[tokio::test]
async fn blank_session_short_circuits_with_zero_upstream_calls() {
    let mut server = mockito::Server::new_async().await;
    let probe = server.mock("GET", PROBE).expect(0).create_async().await;
    let report = server.mock("GET", REPORT).expect(0).create_async().await;

    let client = HacClient::new(&server.url()).unwrap();
    for token in ["", "   "] {
        let outcome = client.get_report_card(&SessionToken::new(token)).await;
        assert_eq!(outcome, ReportOutcome::SessionInvalid);
    }

    probe.assert_async().await;
    report.assert_async().await;
}

#[tokio::test]
async fn rejected_session_never_triggers_the_fetch() {
    let mut server = mockito::Server::new_async().await;
    let probe = server
        .mock("GET", PROBE)
        .with_status(302)
        .with_header("location", "/HomeAccess/Account/LogOn")
        .expect(1)
        .create_async()
        .await;
    let report = server.mock("GET", REPORT).expect(0).create_async().await;

    let client = HacClient::new(&server.url()).unwrap();
    let outcome = client.get_report_card(&SessionToken::new("stale")).await;

    assert_eq!(outcome, ReportOutcome::SessionInvalid);
    probe.assert_async().await;
    report.assert_async().await;
}

#[tokio::test]
async fn auth_status_at_fetch_time_wins_over_well_formed_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", PROBE)
        .with_status(200)
        .create_async()
        .await;
    // The session expired between validate and fetch; the 401 carries a
    // perfectly parseable body, which must not matter.
    server
        .mock("GET", REPORT)
        .with_status(401)
        .with_body(REPORT_PAGE)
        .create_async()
        .await;

    let client = HacClient::new(&server.url()).unwrap();
    let outcome = client.get_report_card(&SessionToken::new("expiring")).await;

    assert_eq!(outcome, ReportOutcome::SessionInvalid);
}

#[tokio::test]
async fn login_redirect_at_fetch_time_is_session_invalid() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", PROBE)
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("GET", REPORT)
        .with_status(302)
        .with_header("location", "/HomeAccess/Account/LogOn?ReturnUrl=%2f")
        .create_async()
        .await;

    let client = HacClient::new(&server.url()).unwrap();
    let outcome = client.get_report_card(&SessionToken::new("expiring")).await;

    assert_eq!(outcome, ReportOutcome::SessionInvalid);
}

#[tokio::test]
async fn every_course_survives_with_explicit_ungraded_entries() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", PROBE)
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("GET", REPORT)
        .with_status(200)
        .with_body(REPORT_PAGE)
        .create_async()
        .await;

    let client = HacClient::new(&server.url()).unwrap();
    let outcome = client.get_report_card(&SessionToken::new("live")).await;

    let ReportOutcome::Success { report } = outcome else {
        panic!("expected success, got {outcome:?}");
    };
    // 4 listed courses, 2 without a posted grade: all present, the
    // ungraded ones carrying None rather than a sentinel.
    assert_eq!(report.courses.len(), 4);
    assert_eq!(report.ungraded_count(), 2);
    assert!(report.courses[2].grade.is_none());
    assert!(report.courses[3].grade.is_none());
    assert_eq!(report.grading_period.label, "MP2");
}

#[tokio::test]
async fn malformed_body_on_live_session_is_parse_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", PROBE)
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("GET", REPORT)
        .with_status(200)
        .with_body("<html><body><h1>We've redesigned Home Access!</h1></body></html>")
        .create_async()
        .await;

    let client = HacClient::new(&server.url()).unwrap();
    let outcome = client.get_report_card(&SessionToken::new("live")).await;

    assert!(
        matches!(outcome, ReportOutcome::ParseError { .. }),
        "got {outcome:?}"
    );
}

#[tokio::test]
async fn portal_5xx_is_upstream_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", PROBE)
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("GET", REPORT)
        .with_status(503)
        .create_async()
        .await;

    let client = HacClient::new(&server.url()).unwrap();
    let outcome = client.get_report_card(&SessionToken::new("live")).await;

    assert!(
        matches!(outcome, ReportOutcome::UpstreamError { .. }),
        "got {outcome:?}"
    );
}

#[tokio::test]
async fn stalled_portal_times_out_as_upstream_error() {
    // A listener that accepts connections but never answers.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let client = HacClient::with_timeout(&base, Duration::from_millis(200)).unwrap();
    let started = Instant::now();
    let outcome = client.get_report_card(&SessionToken::new("live")).await;

    assert!(
        matches!(outcome, ReportOutcome::UpstreamError { .. }),
        "got {outcome:?}"
    );
    // Bounded: timeout plus small overhead, never hanging.
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[tokio::test]
async fn consecutive_fetches_of_unchanged_data_are_equal() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", PROBE)
        .with_status(200)
        .expect(2)
        .create_async()
        .await;
    server
        .mock("GET", REPORT)
        .with_status(200)
        .with_body(REPORT_PAGE)
        .expect(2)
        .create_async()
        .await;

    let client = HacClient::new(&server.url()).unwrap();
    let token = SessionToken::new("live");
    let first = client.get_report_card(&token).await;
    let second = client.get_report_card(&token).await;

    assert!(first.is_success());
    assert_eq!(first, second);
}

#[tokio::test]
async fn trait_validate_maps_portal_failures_to_portal_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", PROBE)
        .with_status(503)
        .create_async()
        .await;

    let client = HacClient::new(&server.url()).unwrap();
    let err = GradePortal::validate_session(&client, &SessionToken::new("live"))
        .await
        .unwrap_err();

    let CoreError::Portal(detail) = err;
    assert!(detail.contains("503"), "got {detail}");
}

#[tokio::test]
async fn classwork_flow_shares_gating_and_taxonomy() {
    let classwork_page = r#"
        <html><body>
        <div class="AssignmentClass">
            <a class="sg-header-heading">MTH203 - 1 : Algebra II</a>
            <table class="sg-asp-table">
                <tr class="sg-asp-table-data-row">
                    <td>11/04/2025</td><td>Quadratics Quiz</td><td>Test</td><td>88</td><td>100</td>
                </tr>
            </table>
        </div>
        </body></html>"#;

    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", PROBE)
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("GET", CLASSWORK)
        .with_status(200)
        .with_body(classwork_page)
        .create_async()
        .await;

    let client = HacClient::new(&server.url()).unwrap();

    // Blank token short-circuits classwork the same way.
    let blank = client.get_classwork(&SessionToken::new("")).await;
    assert_eq!(blank, ReportOutcome::SessionInvalid);

    let outcome = client.get_classwork(&SessionToken::new("live")).await;
    let ReportOutcome::Success { report } = outcome else {
        panic!("expected success, got {outcome:?}");
    };
    assert_eq!(report.courses.len(), 1);
    assert_eq!(report.courses[0].assignments.len(), 1);
}
