use super::*;
use serde_json::json;

#[test]
fn test_request_serializes_query_as_is() {
    let request = SubmissionRequest::new("SELECT * FROM Movie");
    let body = serde_json::to_string(&request).unwrap();
    assert_eq!(body, r#"{"query":"SELECT * FROM Movie"}"#);
}

#[test]
fn test_empty_query_is_legal() {
    let request = SubmissionRequest::new("");
    let body = serde_json::to_string(&request).unwrap();
    assert_eq!(body, r#"{"query":""}"#);
}

#[test]
fn test_response_decodes_full_shape() {
    let body = r#"{
        "comparison": true,
        "error": null,
        "expected": [["1", "Alien"]],
        "result": [["1", "Alien"]]
    }"#;
    let response: SubmissionResponse = serde_json::from_str(body).unwrap();
    assert!(response.comparison);
    assert!(response.error.is_none());
    assert_eq!(response.expected.len(), 1);
    assert_eq!(response.result.len(), 1);
}

#[test]
fn test_response_tolerates_unknown_fields() {
    // The live service attaches verify/modification queries
    let body = r#"{
        "comparison": false,
        "error": null,
        "expected": [],
        "result": [],
        "verify": "SELECT * FROM Movie",
        "modification": ""
    }"#;
    let response: SubmissionResponse = serde_json::from_str(body).unwrap();
    assert!(!response.comparison);
}

#[test]
fn test_response_fields_default_when_absent() {
    let response: SubmissionResponse = serde_json::from_str("{}").unwrap();
    assert!(!response.comparison);
    assert!(response.error.is_none());
    assert!(response.expected.is_empty());
    assert!(response.result.is_empty());
}

#[test]
fn test_verdict_error_checked_first() {
    // comparison is not trusted when an error is present
    let response = SubmissionResponse {
        comparison: true,
        error: Some("no such table: Movie".to_string()),
        expected: Vec::new(),
        result: Vec::new(),
    };
    let verdict = Verdict::resolve(&response);
    assert_eq!(verdict, Verdict::Error("no such table: Movie".to_string()));
    assert!(verdict.is_error());
}

#[test]
fn test_verdict_correct() {
    let response = SubmissionResponse {
        comparison: true,
        ..SubmissionResponse::default()
    };
    let verdict = Verdict::resolve(&response);
    assert_eq!(verdict, Verdict::Graded { correct: true });
    assert_eq!(verdict.text(), "Correct");
    assert!(!verdict.is_error());
}

#[test]
fn test_verdict_incorrect() {
    let verdict = Verdict::resolve(&SubmissionResponse::default());
    assert_eq!(verdict, Verdict::Graded { correct: false });
    assert_eq!(verdict.text(), "Incorrect");
    assert!(!verdict.is_error());
}

#[test]
fn test_verdict_error_text_is_prefixed_verbatim() {
    let response = SubmissionResponse {
        error: Some("syntax error near SELECT".to_string()),
        ..SubmissionResponse::default()
    };
    let verdict = Verdict::resolve(&response);
    assert_eq!(verdict.text(), "Error: syntax error near SELECT");
}

#[test]
fn test_empty_error_string_counts_as_absent() {
    let response = SubmissionResponse {
        comparison: true,
        error: Some(String::new()),
        ..SubmissionResponse::default()
    };
    assert_eq!(Verdict::resolve(&response), Verdict::Graded { correct: true });
}

#[test]
fn test_cell_text_string_renders_bare() {
    assert_eq!(cell_text(&json!("Alien")), "Alien");
}

#[test]
fn test_cell_text_scalars() {
    assert_eq!(cell_text(&json!(1979)), "1979");
    assert_eq!(cell_text(&json!(4.5)), "4.5");
    assert_eq!(cell_text(&json!(true)), "true");
    assert_eq!(cell_text(&json!(null)), "");
}

#[test]
fn test_cell_text_keeps_markup_as_text() {
    let cell = json!("<script>alert(1)</script>");
    assert_eq!(cell_text(&cell), "<script>alert(1)</script>");
}
