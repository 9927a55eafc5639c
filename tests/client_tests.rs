use jobboard::api::{HttpJobBoardClient, SearchFilters, ALL_CATEGORIES};
use jobboard::domain::{Job, JobBoardError, JobDraft, JobId};

fn client() -> HttpJobBoardClient {
    HttpJobBoardClient::new("http://localhost:8000/api").unwrap()
}

#[test]
fn test_search_url_omits_blank_filters() {
    let filters = SearchFilters {
        query: "cook".to_string(),
        city: String::new(),
        category: ALL_CATEGORIES.to_string(),
    };
    let url = client().search_url(&filters).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8000/api/jobs?q=cook");

    let url = client().search_url(&SearchFilters::default()).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8000/api/jobs");
}

#[test]
fn test_search_url_encodes_values() {
    let filters = SearchFilters {
        city: "Portland, OR".to_string(),
        category: "Moving help".to_string(),
        ..Default::default()
    };
    let url = client().search_url(&filters).unwrap();
    assert_eq!(
        url.as_str(),
        "http://localhost:8000/api/jobs?city=Portland%2C+OR&category=Moving+help"
    );
}

#[test]
fn test_apply_url_handles_trailing_slash() {
    let client = HttpJobBoardClient::new("http://localhost:8000/api/").unwrap();
    let url = client.apply_url(&JobId::new("42")).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8000/api/jobs/42/apply");
}

#[test]
fn test_invalid_api_base_is_rejected() {
    let result = HttpJobBoardClient::new("not a url");
    assert!(matches!(result, Err(JobBoardError::Config(_))));
}

#[test]
fn test_job_decodes_numeric_and_text_ids() {
    let body = r#"[
        {"id": 7, "title": "Yard work", "city": "Austin", "category": "Outdoor",
         "pay_amount": 25.5, "pay_type": "hourly", "description": null,
         "created_at": "2026-01-01T10:00:00"},
        {"id": "abc", "title": "Tutor", "city": "Remote", "category": "Teaching",
         "pay_amount": 40}
    ]"#;
    let jobs: Vec<Job> = serde_json::from_str(body).unwrap();

    assert_eq!(jobs[0].id, JobId::new("7"));
    assert_eq!(jobs[0].pay_amount, 25.5);
    assert_eq!(jobs[1].id, JobId::new("abc"));
    assert_eq!(jobs[1].description, None);
    assert_eq!(jobs[1].pay_type, "");
}

#[test]
fn test_draft_coercion() {
    let mut draft = JobDraft {
        title: "Paint fence".to_string(),
        pay_amount: "1500".to_string(),
        ..Default::default()
    };
    let body = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
    assert_eq!(body["pay_amount"], serde_json::json!(1500));
    assert!(body["duration_hours"].is_null());

    draft.pay_amount = "12.5".to_string();
    draft.duration_hours = " 3 ".to_string();
    let body = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
    assert_eq!(body["pay_amount"], serde_json::json!(12.5));
    assert_eq!(body["duration_hours"], serde_json::json!(3));

    for bad in ["", "-4", "abc", "NaN", "inf"] {
        draft.pay_amount = bad.to_string();
        assert!(
            matches!(
                draft.to_payload(),
                Err(JobBoardError::InvalidDraft { field: "pay_amount", .. })
            ),
            "accepted pay amount {bad:?}"
        );
    }

    draft.pay_amount = "10".to_string();
    draft.duration_hours = "soon".to_string();
    assert!(matches!(
        draft.to_payload(),
        Err(JobBoardError::InvalidDraft { field: "duration_hours", .. })
    ));
}

#[test]
fn test_negative_zero_is_sent_as_zero() {
    let draft = JobDraft {
        pay_amount: "-0".to_string(),
        duration_hours: "-0.0".to_string(),
        ..Default::default()
    };
    let payload = draft.to_payload().unwrap();

    assert_eq!(serde_json::to_string(&payload.pay_amount).unwrap(), "0.0");
    let duration = payload.duration_hours.unwrap();
    assert_eq!(serde_json::to_string(&duration).unwrap(), "0.0");
}
