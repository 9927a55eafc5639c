mod common;

use common::{jobs, FakeApi, Scripted};
use jobboard::api::{ApiResponse, SearchFilters};
use jobboard::app::{ApplicantField, FilterField, PostStatus, Section, Submission};
use jobboard::domain::{DraftField, JobId};
use jobboard::{handle_event, Action, AppState, Controller, Event};

async fn loaded(api: FakeApi) -> Controller<FakeApi> {
    let mut controller = Controller::new(AppState::new(), api);
    controller.dispatch(Event::Initialize).await.unwrap();
    controller
}

async fn type_into(
    controller: &mut Controller<FakeApi>,
    id: &str,
    field: ApplicantField,
    value: &str,
) {
    controller
        .dispatch(Event::SetApplicantField {
            job_id: JobId::new(id),
            field,
            value: value.to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_initialize_loads_with_no_filters() {
    let api = FakeApi::new().with_search(Scripted::Ok(jobs(&[1, 2])));
    let controller = loaded(api).await;

    assert_eq!(controller.api().search_count(), 1);
    assert!(controller.api().search_calls.lock().unwrap()[0].is_empty());

    let state = controller.state();
    assert_eq!(state.list.jobs().len(), 2);
    assert_eq!(state.cards.len(), 2);
    assert!(!state.list.loading);
}

#[tokio::test]
async fn test_search_sends_current_filters() {
    let api = FakeApi::new()
        .with_search(Scripted::Ok(jobs(&[1])))
        .with_search(Scripted::Ok(Vec::new()));
    let mut controller = loaded(api).await;

    controller
        .dispatch(Event::SetFilter {
            field: FilterField::Query,
            value: "cook".to_string(),
        })
        .await
        .unwrap();
    let outcome = controller.dispatch(Event::Search).await.unwrap();
    assert!(outcome.render);

    let calls = controller.api().search_calls.lock().unwrap().clone();
    assert_eq!(calls[1].query_pairs(), vec![("q", "cook")]);

    let state = controller.state();
    assert!(state.list.no_results);
    assert!(state.cards.is_empty());
}

#[tokio::test]
async fn test_refresh_clears_filters() {
    let mut controller = loaded(FakeApi::new()).await;
    controller
        .dispatch(Event::SetFilter {
            field: FilterField::City,
            value: "Austin".to_string(),
        })
        .await
        .unwrap();

    controller.dispatch(Event::Refresh).await.unwrap();

    assert_eq!(controller.state().filters, SearchFilters::default());
    let calls = controller.api().search_calls.lock().unwrap().clone();
    assert!(calls.last().unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_search_keeps_previous_results() {
    let api = FakeApi::new()
        .with_search(Scripted::Ok(jobs(&[1, 2])))
        .with_search(Scripted::Fail);
    let mut controller = loaded(api).await;

    let outcome = controller.dispatch(Event::Search).await.unwrap();
    assert!(outcome.render);

    let state = controller.state();
    assert_eq!(state.list.jobs().len(), 2);
    assert_eq!(state.cards.len(), 2);
    assert!(!state.list.loading);
    assert_eq!(
        state.search_notice.as_deref(),
        Some("Could not load jobs. Showing previous results.")
    );
}

#[tokio::test]
async fn test_apply_sends_trimmed_fields() {
    let api = FakeApi::new().with_search(Scripted::Ok(jobs(&[42])));
    let mut controller = loaded(api).await;

    controller
        .dispatch(Event::TogglePanel { job_id: JobId::new("42") })
        .await
        .unwrap();
    type_into(&mut controller, "42", ApplicantField::Name, "Ann").await;
    type_into(&mut controller, "42", ApplicantField::Contact, " ann@x.com ").await;

    let outcome = controller
        .dispatch(Event::SendApplication { job_id: JobId::new("42") })
        .await
        .unwrap();
    assert!(outcome.render);

    let calls = controller.api().apply_calls.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, JobId::new("42"));
    assert_eq!(calls[0].1.name, "Ann");
    assert_eq!(calls[0].1.phone_or_email, "ann@x.com");
    assert_eq!(calls[0].1.message, "");

    let card = controller.state().cards.get(&JobId::new("42")).unwrap();
    assert_eq!(card.submission, Submission::Sent);
    assert!(card.panel_open);
}

#[tokio::test]
async fn test_failed_apply_keeps_panel_and_fields() {
    let api = FakeApi::new()
        .with_search(Scripted::Ok(jobs(&[7])))
        .with_apply(Scripted::Fail);
    let mut controller = loaded(api).await;

    controller
        .dispatch(Event::TogglePanel { job_id: JobId::new("7") })
        .await
        .unwrap();
    type_into(&mut controller, "7", ApplicantField::Message, "Available Friday").await;
    controller
        .dispatch(Event::SendApplication { job_id: JobId::new("7") })
        .await
        .unwrap();

    let card = controller.state().cards.get(&JobId::new("7")).unwrap();
    assert_eq!(card.submission, Submission::Error);
    assert!(card.panel_open);
    assert_eq!(card.applicant_message, "Available Friday");

    // A retry is allowed after an error
    controller
        .dispatch(Event::SendApplication { job_id: JobId::new("7") })
        .await
        .unwrap();
    let card = controller.state().cards.get(&JobId::new("7")).unwrap();
    assert_eq!(card.submission, Submission::Sent);
    assert_eq!(controller.api().apply_count(), 2);
}

#[tokio::test]
async fn test_send_with_closed_panel_is_ignored() {
    let api = FakeApi::new().with_search(Scripted::Ok(jobs(&[3])));
    let mut controller = loaded(api).await;

    let outcome = controller
        .dispatch(Event::SendApplication { job_id: JobId::new("3") })
        .await
        .unwrap();

    assert!(!outcome.render);
    assert_eq!(controller.api().apply_count(), 0);
}

#[tokio::test]
async fn test_unknown_card_events_are_ignored() {
    let api = FakeApi::new().with_search(Scripted::Ok(jobs(&[1])));
    let mut controller = loaded(api).await;

    let outcome = controller
        .dispatch(Event::TogglePanel { job_id: JobId::new("99") })
        .await
        .unwrap();
    assert!(!outcome.render);
    assert!(!controller.state().cards.contains(&JobId::new("99")));
}

#[tokio::test]
async fn test_successful_post_clears_draft_reloads_and_navigates() {
    let api = FakeApi::new()
        .with_search(Scripted::Ok(Vec::new()))
        .with_search(Scripted::Ok(jobs(&[1])));
    let mut controller = loaded(api).await;

    for (field, value) in [
        (DraftField::Title, "Move a couch"),
        (DraftField::City, "Portland, OR"),
        (DraftField::PayAmount, "1500"),
        (DraftField::DurationHours, ""),
    ] {
        controller
            .dispatch(Event::SetDraftField {
                field,
                value: value.to_string(),
            })
            .await
            .unwrap();
    }

    let outcome = controller.dispatch(Event::SubmitJobPost).await.unwrap();
    assert!(outcome.render);
    assert_eq!(outcome.navigate, Some(Section::Jobs));

    let created = controller.api().create_calls.lock().unwrap().clone();
    let body = serde_json::to_value(&created[0]).unwrap();
    assert_eq!(body["pay_amount"], serde_json::json!(1500));
    assert!(body["duration_hours"].is_null());

    let state = controller.state();
    assert_eq!(state.post_status, PostStatus::Posted);
    assert!(state.draft.title.is_empty());
    assert_eq!(state.list.jobs().len(), 1);
    assert_eq!(controller.api().search_count(), 2);
}

#[tokio::test]
async fn test_failed_post_keeps_draft() {
    let api = FakeApi::new().with_create(Scripted::Fail);
    let mut controller = loaded(api).await;

    controller
        .dispatch(Event::SetDraftField {
            field: DraftField::PayAmount,
            value: "20".to_string(),
        })
        .await
        .unwrap();
    let outcome = controller.dispatch(Event::SubmitJobPost).await.unwrap();

    assert_eq!(outcome.navigate, None);
    assert_eq!(controller.state().post_status, PostStatus::Failed);
    assert_eq!(controller.state().draft.pay_amount, "20");
    assert_eq!(controller.api().search_count(), 1);
}

#[tokio::test]
async fn test_invalid_draft_sends_nothing() {
    let mut controller = loaded(FakeApi::new()).await;

    controller
        .dispatch(Event::SetDraftField {
            field: DraftField::PayAmount,
            value: "lots".to_string(),
        })
        .await
        .unwrap();
    controller.dispatch(Event::SubmitJobPost).await.unwrap();

    assert_eq!(controller.api().create_count(), 0);
    assert_eq!(controller.state().post_status, PostStatus::Failed);
    assert_eq!(controller.state().draft.pay_amount, "lots");
}

#[test]
fn test_stale_search_response_is_discarded() {
    let mut state = AppState::new();
    handle_event(&mut state, &Event::Search).unwrap();
    handle_event(&mut state, &Event::Search).unwrap();

    let (render, actions) = handle_event(
        &mut state,
        &Event::ApiResponse(ApiResponse::JobsLoaded {
            token: 1,
            jobs: jobs(&[1]),
        }),
    )
    .unwrap();
    assert!(!render);
    assert!(actions.is_empty());
    assert!(state.list.jobs().is_empty());
    assert!(state.list.loading);

    let (render, _) = handle_event(
        &mut state,
        &Event::ApiResponse(ApiResponse::JobsLoaded {
            token: 2,
            jobs: jobs(&[2]),
        }),
    )
    .unwrap();
    assert!(render);
    assert_eq!(state.list.jobs()[0].id, JobId::new("2"));
}

fn state_with_open_card(id: &str) -> AppState {
    let mut state = AppState::new();
    handle_event(&mut state, &Event::Search).unwrap();
    let token = state.list.latest_token();
    handle_event(
        &mut state,
        &Event::ApiResponse(ApiResponse::JobsLoaded {
            token,
            jobs: jobs(&[id.parse().unwrap()]),
        }),
    )
    .unwrap();
    handle_event(&mut state, &Event::TogglePanel { job_id: JobId::new(id) }).unwrap();
    state
}

#[test]
fn test_send_while_sending_is_ignored() {
    let mut state = state_with_open_card("5");
    let id = JobId::new("5");

    let (render, actions) =
        handle_event(&mut state, &Event::SendApplication { job_id: id.clone() }).unwrap();
    assert!(render);
    assert_eq!(actions.len(), 1);

    let (render, actions) =
        handle_event(&mut state, &Event::SendApplication { job_id: id.clone() }).unwrap();
    assert!(!render);
    assert!(actions.is_empty());

    let card = state.cards.get(&id).unwrap();
    assert_eq!(card.submission, Submission::Sending);
    assert_eq!(card.attempt, 1);
}

#[test]
fn test_superseded_apply_response_is_discarded() {
    let mut state = state_with_open_card("5");
    let id = JobId::new("5");

    handle_event(&mut state, &Event::SendApplication { job_id: id.clone() }).unwrap();
    handle_event(
        &mut state,
        &Event::ApiResponse(ApiResponse::ApplicationFailed {
            job_id: id.clone(),
            attempt: 1,
            message: "timeout".to_string(),
        }),
    )
    .unwrap();
    assert_eq!(state.cards.get(&id).unwrap().submission, Submission::Error);

    // Resend from Error starts attempt 2
    let (_, actions) =
        handle_event(&mut state, &Event::SendApplication { job_id: id.clone() }).unwrap();
    assert!(matches!(actions.as_slice(), [Action::Api(_)]));

    // A late answer for attempt 1 must not settle attempt 2
    let (render, _) = handle_event(
        &mut state,
        &Event::ApiResponse(ApiResponse::ApplicationSent {
            job_id: id.clone(),
            attempt: 1,
        }),
    )
    .unwrap();
    assert!(!render);
    assert_eq!(state.cards.get(&id).unwrap().submission, Submission::Sending);

    handle_event(
        &mut state,
        &Event::ApiResponse(ApiResponse::ApplicationSent {
            job_id: id.clone(),
            attempt: 2,
        }),
    )
    .unwrap();
    assert_eq!(state.cards.get(&id).unwrap().submission, Submission::Sent);
}

#[test]
fn test_apply_response_for_pruned_card_is_discarded() {
    let mut state = state_with_open_card("5");
    let id = JobId::new("5");
    handle_event(&mut state, &Event::SendApplication { job_id: id.clone() }).unwrap();

    // A new search drops job 5 before its application answer arrives
    handle_event(&mut state, &Event::Search).unwrap();
    let token = state.list.latest_token();
    handle_event(
        &mut state,
        &Event::ApiResponse(ApiResponse::JobsLoaded {
            token,
            jobs: jobs(&[6]),
        }),
    )
    .unwrap();
    assert!(!state.cards.contains(&id));

    let (render, actions) = handle_event(
        &mut state,
        &Event::ApiResponse(ApiResponse::ApplicationSent {
            job_id: id.clone(),
            attempt: 1,
        }),
    )
    .unwrap();
    assert!(!render);
    assert!(actions.is_empty());
    assert!(!state.cards.contains(&id));
    assert_eq!(state.cards.len(), 1);
}
