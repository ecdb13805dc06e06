//! Controller tests against a scripted trust service

use super::{AssessmentController, Completion, FAILURE_NOTICE};
use crate::error::TransportError;
use crate::logic::features::{FeatureId, FEATURE_COUNT};
use crate::logic::testing::{mean_radius, sample_result, ScriptedApi};

#[tokio::test]
async fn test_successful_assessment() {
    let api = ScriptedApi::new();
    let mut controller = AssessmentController::new(api.clone());

    controller.set_value(mean_radius(), "1");
    let gate = api.expect(1);

    controller.submit();
    assert!(controller.is_busy());

    gate.send(Ok(sample_result(92.0, "SAFE"))).unwrap();
    assert_eq!(controller.next_completion().await, Completion::Updated);

    assert!(!controller.is_busy());
    let result = controller.state().assessment.last_result.as_ref().unwrap();
    assert_eq!(result.trust.trust_score, 92.0);
    assert_eq!(result.trust.trust_label.as_deref(), Some("SAFE"));
}

#[tokio::test]
async fn test_request_carries_all_features() {
    let api = ScriptedApi::new();
    let mut controller = AssessmentController::new(api.clone());

    controller.set_value(mean_radius(), "3");
    // Not one of the editable form fields
    let hidden = FeatureId::from_name("worst concavity").unwrap();
    controller.set_value(hidden, "0.25");

    let gate = api.expect(3);
    controller.submit();
    gate.send(Ok(sample_result(70.0, "REVIEW"))).unwrap();
    controller.next_completion().await;

    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    let body = serde_json::to_value(&requests[0]).unwrap();
    let features = body["features"].as_object().unwrap();
    assert_eq!(features.len(), FEATURE_COUNT);
    assert_eq!(features["worst concavity"], 0.25);
    assert_eq!(features["mean texture"], 15.0);
}

#[tokio::test]
async fn test_transport_failure_keeps_last_result() {
    let api = ScriptedApi::new();
    let mut controller = AssessmentController::new(api.clone());

    controller.set_value(mean_radius(), "1");
    let gate = api.expect(1);
    controller.submit();
    gate.send(Ok(sample_result(55.0, "REVIEW"))).unwrap();
    controller.next_completion().await;
    let before = controller.state().assessment.last_result.clone();

    controller.set_value(mean_radius(), "2");
    let gate = api.expect(2);
    controller.submit();
    gate.send(Err(TransportError::MalformedBody("expected value at line 1".to_string())))
        .unwrap();

    match controller.next_completion().await {
        Completion::Failed(notice) => assert!(notice.starts_with(FAILURE_NOTICE)),
        other => panic!("Expected Failed, got {:?}", other),
    }
    assert!(!controller.is_busy());
    assert_eq!(controller.state().assessment.last_result, before);
}

#[tokio::test]
async fn test_failure_before_any_result() {
    let api = ScriptedApi::new();
    let mut controller = AssessmentController::new(api.clone());

    // No gate registered: the scripted service reports a network error
    controller.submit();
    assert!(matches!(controller.next_completion().await, Completion::Failed(_)));
    assert!(!controller.is_busy());
    assert!(controller.state().assessment.last_result.is_none());
}

#[tokio::test]
async fn test_late_response_to_superseded_request_is_dropped() {
    let api = ScriptedApi::new();
    let mut controller = AssessmentController::new(api.clone());

    controller.set_value(mean_radius(), "1");
    let first = api.expect(1);
    controller.submit();

    controller.set_value(mean_radius(), "2");
    let second = api.expect(2);
    controller.submit();

    // Newest resolves first, the older one straggles in afterwards
    second.send(Ok(sample_result(88.0, "SAFE"))).unwrap();
    assert_eq!(controller.next_completion().await, Completion::Updated);
    assert!(!controller.is_busy());

    first.send(Ok(sample_result(12.0, "UNSAFE"))).unwrap();
    assert_eq!(controller.next_completion().await, Completion::Stale);

    let result = controller.state().assessment.last_result.as_ref().unwrap();
    assert_eq!(result.trust.trust_label.as_deref(), Some("SAFE"));
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn test_stale_response_before_latest_keeps_busy() {
    let api = ScriptedApi::new();
    let mut controller = AssessmentController::new(api.clone());

    controller.set_value(mean_radius(), "1");
    let first = api.expect(1);
    controller.submit();

    controller.set_value(mean_radius(), "2");
    let second = api.expect(2);
    controller.submit();

    first.send(Ok(sample_result(12.0, "UNSAFE"))).unwrap();
    assert_eq!(controller.next_completion().await, Completion::Stale);
    assert!(controller.is_busy());
    assert!(controller.state().assessment.last_result.is_none());

    second.send(Ok(sample_result(64.0, "REVIEW"))).unwrap();
    assert_eq!(controller.next_completion().await, Completion::Updated);
    assert_eq!(
        controller.state().assessment.last_result.as_ref().unwrap().trust.trust_score,
        64.0
    );
}
