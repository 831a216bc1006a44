// src/booking/tests/controller_tests.rs

use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use super::support::{Behaviour, RecordingView, ScriptedRelay, SubmitControl};
use crate::booking::controller::{BookingForm, DispatchOutcome};
use crate::booking::events::{bindings, FormEvent, HandlerAction, FORM_ID};
use crate::booking::models::*;
use crate::booking::view::{DELIVERY_FAILED_NOTICE, SUBMITTING_LABEL, SUBMIT_LABEL};
use crate::common::FieldError;

fn idle_control() -> SubmitControl {
    SubmitControl {
        enabled: true,
        label: SUBMIT_LABEL.to_string(),
    }
}

fn assert_failed_and_restored(form: &BookingForm<RecordingView, ScriptedRelay>) {
    let view = form.view();
    assert!(view.form_visible);
    assert_eq!(view.success_shown, 0);
    assert_eq!(view.alerts, vec![DELIVERY_FAILED_NOTICE.to_string()]);
    assert_eq!(view.control(), idle_control());
    assert_eq!(form.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn test_successful_submit_hides_form_once() {
    let view = RecordingView::filled();
    let relay = ScriptedRelay::new(Behaviour::Succeed).watching(&view);
    let delivered = relay.delivered.clone();
    let mut form = BookingForm::new(view, relay);

    let result = form.submit().await;

    assert_eq!(result, SubmitResult::Sent(SubmissionOutcome::Success));
    assert_eq!(form.state(), SubmissionState::Completed);
    assert!(!form.view().form_visible);
    assert_eq!(form.view().success_shown, 1);
    assert!(form.view().alerts.is_empty());
    assert_eq!(form.view().control(), idle_control());

    let delivered = delivered.lock().unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].phone, "+7 (999) 123-45-67");
    assert_eq!(delivered[0].service, "tattoo");
}

#[tokio::test]
async fn test_control_is_disabled_before_delivery_starts() {
    let view = RecordingView::filled();
    let relay = ScriptedRelay::new(Behaviour::Succeed).watching(&view);
    let seen = relay.control_at_call.clone();
    let mut form = BookingForm::new(view, relay);

    form.submit().await;

    assert_eq!(
        *seen.lock().unwrap(),
        vec![SubmitControl {
            enabled: false,
            label: SUBMITTING_LABEL.to_string(),
        }]
    );
}

#[tokio::test]
async fn test_immediate_failure_restores_control() {
    let view = RecordingView::filled();
    let relay = ScriptedRelay::new(Behaviour::FailImmediately).watching(&view);
    let seen = relay.control_at_call.clone();
    let mut form = BookingForm::new(view, relay);

    let result = form.submit().await;

    assert!(matches!(
        result,
        SubmitResult::Sent(SubmissionOutcome::Failure(_))
    ));
    assert!(!seen.lock().unwrap()[0].enabled);
    assert_failed_and_restored(&form);
}

#[tokio::test]
async fn test_deferred_failure_restores_control() {
    let view = RecordingView::filled();
    let relay = ScriptedRelay::new(Behaviour::FailAfterYield).watching(&view);
    let mut form = BookingForm::new(view, relay);

    let result = form.submit().await;

    match result {
        SubmitResult::Sent(SubmissionOutcome::Failure(reason)) => {
            assert!(reason.contains("502"))
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_failed_and_restored(&form);
}

#[tokio::test]
async fn test_failed_submit_keeps_entered_data() {
    let mut view = RecordingView::filled();
    view.type_into(BookingField::Message, "Перезвоните вечером");
    let mut form = BookingForm::new(view, ScriptedRelay::new(Behaviour::FailImmediately));

    form.submit().await;

    let input = form.read_input();
    assert_eq!(input.name, "Анна");
    assert_eq!(input.phone, "+7 (999) 123-45-67");
    assert_eq!(input.message, "Перезвоните вечером");
}

#[tokio::test]
async fn test_retry_after_failure_is_accepted() {
    let view = RecordingView::filled();
    let mut form = BookingForm::new(view, ScriptedRelay::new(Behaviour::FailImmediately));

    form.submit().await;
    let second = form.submit().await;

    assert_ne!(second, SubmitResult::Ignored);
    assert_eq!(form.view().alerts.len(), 2);
}

#[tokio::test]
async fn test_panicking_relay_still_restores_control() {
    let view = RecordingView::filled();
    let mut form = BookingForm::new(view, ScriptedRelay::new(Behaviour::Panic));

    let caught = AssertUnwindSafe(form.submit()).catch_unwind().await;

    assert!(caught.is_err());
    assert_eq!(form.view().control(), idle_control());
    assert_eq!(form.state(), SubmissionState::Idle);
    assert!(form.view().form_visible);
}

#[tokio::test]
async fn test_dropped_submission_restores_control() {
    let view = RecordingView::filled();
    let mut form = BookingForm::new(view, ScriptedRelay::new(Behaviour::Hang));

    let timed_out = tokio::time::timeout(Duration::from_millis(20), form.submit()).await;

    assert!(timed_out.is_err());
    assert_eq!(form.view().control(), idle_control());
    assert_eq!(form.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn test_invalid_form_never_reaches_relay() {
    let mut view = RecordingView::new();
    view.type_into(BookingField::Name, "Анна");
    view.type_into(BookingField::Phone, "+79991234567");
    let relay = ScriptedRelay::new(Behaviour::Succeed).watching(&view);
    let delivered = relay.delivered.clone();
    let seen = relay.control_at_call.clone();
    let mut form = BookingForm::new(view, relay);

    let result = form.submit().await;

    assert_eq!(result, SubmitResult::Rejected(vec![BookingField::Service]));
    assert_eq!(form.state(), SubmissionState::Idle);
    assert!(delivered.lock().unwrap().is_empty());
    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(form.view().control(), idle_control());
    assert_eq!(
        form.view().errors.get(&BookingField::Service).map(String::as_str),
        Some("Выберите услугу")
    );
    assert!(!form.view().is_invalid(BookingField::Name));
}

#[tokio::test]
async fn test_rejected_submit_marks_fields_like_validate_form() {
    let half_filled = || {
        let mut view = RecordingView::new();
        view.type_into(BookingField::Name, "A");
        view.type_into(BookingField::Email, "not-an-email");
        view
    };

    let mut checked = BookingForm::new(half_filled(), ScriptedRelay::new(Behaviour::Succeed));
    let mut submitted = BookingForm::new(half_filled(), ScriptedRelay::new(Behaviour::Succeed));

    assert!(!checked.validate_form());
    let result = submitted.submit().await;

    assert_eq!(
        result,
        SubmitResult::Rejected(BookingField::VALIDATED.to_vec())
    );
    assert_eq!(submitted.view().errors, checked.view().errors);
}

#[tokio::test]
async fn test_submit_clears_stale_inline_errors() {
    let mut view = RecordingView::filled();
    view.errors
        .insert(BookingField::Phone, "Введите номер телефона".to_string());
    let mut form = BookingForm::new(view, ScriptedRelay::new(Behaviour::Succeed));

    let result = form.submit().await;

    assert_eq!(result, SubmitResult::Sent(SubmissionOutcome::Success));
    assert!(form.view().errors.is_empty());
}

#[tokio::test]
async fn test_submit_after_success_is_ignored() {
    let view = RecordingView::filled();
    let relay = ScriptedRelay::new(Behaviour::Succeed);
    let delivered = relay.delivered.clone();
    let mut form = BookingForm::new(view, relay);

    form.submit().await;
    let again = form.submit().await;

    assert_eq!(again, SubmitResult::Ignored);
    assert_eq!(delivered.lock().unwrap().len(), 1);
    assert_eq!(form.view().success_shown, 1);
}

#[test]
fn test_validate_form_marks_and_clears_fields() {
    let mut view = RecordingView::new();
    view.type_into(BookingField::Email, "not-an-email");
    let mut form = BookingForm::new(view, ScriptedRelay::new(Behaviour::Succeed));

    assert!(!form.validate_form());
    for field in BookingField::VALIDATED {
        assert!(form.view().is_invalid(field), "{field} should be invalid");
    }

    let view = form.view_mut();
    view.type_into(BookingField::Name, "Анна");
    view.type_into(BookingField::Phone, "+79991234567");
    view.type_into(BookingField::Email, "");
    view.type_into(BookingField::Service, "coverup");

    assert!(form.validate_form());
    assert!(form.view().errors.is_empty());
}

#[test]
fn test_validate_field_updates_only_that_field() {
    let mut view = RecordingView::new();
    view.type_into(BookingField::Name, "A");
    let mut form = BookingForm::new(view, ScriptedRelay::new(Behaviour::Succeed));

    assert_eq!(
        form.validate_field(BookingField::Name),
        Err(FieldError::NameTooShort)
    );
    assert_eq!(
        form.view().errors.get(&BookingField::Name).map(String::as_str),
        Some("Имя должно содержать минимум 2 символа")
    );
    assert!(!form.view().is_invalid(BookingField::Phone));

    form.view_mut().type_into(BookingField::Name, "Ан");
    assert_eq!(form.validate_field(BookingField::Name), Ok(()));
    assert!(!form.view().is_invalid(BookingField::Name));
}

#[test]
fn test_binding_table() {
    let table = bindings();

    assert_eq!(table.len(), 5);
    for field in BookingField::VALIDATED {
        assert!(table.iter().any(|b| b.event == FormEvent::Input
            && b.target_id == field.id()
            && b.action == HandlerAction::ValidateField(field)));
    }
    assert!(table.iter().any(|b| b.event == FormEvent::Submit
        && b.target_id == FORM_ID
        && b.action == HandlerAction::SubmitForm));
}

#[tokio::test]
async fn test_dispatch_runs_registered_handlers() {
    let mut view = RecordingView::new();
    view.type_into(BookingField::Phone, "123");
    let mut form = BookingForm::new(view, ScriptedRelay::new(Behaviour::Succeed));

    let outcome = form.dispatch(FormEvent::Input, "phone").await;
    assert_eq!(
        outcome,
        Some(DispatchOutcome::FieldChecked(
            BookingField::Phone,
            Err(FieldError::InvalidPhoneFormat)
        ))
    );
    assert!(form.view().is_invalid(BookingField::Phone));
    assert!(!form.view().is_invalid(BookingField::Name));

    // No rules on the message field, so no handler either.
    assert_eq!(form.dispatch(FormEvent::Input, "message").await, None);
    assert_eq!(form.dispatch(FormEvent::Submit, "phone").await, None);

    let view = form.view_mut();
    view.type_into(BookingField::Name, "Анна");
    view.type_into(BookingField::Phone, "+79991234567");
    view.type_into(BookingField::Service, "tattoo");

    let outcome = form.dispatch(FormEvent::Submit, FORM_ID).await;
    assert_eq!(
        outcome,
        Some(DispatchOutcome::Submitted(SubmitResult::Sent(
            SubmissionOutcome::Success
        )))
    );
    assert!(!form.view().form_visible);
}
