use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use api::draft::PaymentDraft;
use api::form::FormEvent;
use api::form::FormPhase;
use api::gateway::FixedStatusGateway;
use api::gateway::OfflineGateway;
use api::gateway::PaymentSubmitter;
use api::gateway::SimulatedGateway;
use api::navigation::Navigator;
use api::outcome::OutcomeKind;
use api::session::FormSession;
use api::source_account::SourceAccount;

/// Remembers every path it was asked to go to.
#[derive(Default)]
struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}

fn session_with(submitter: impl PaymentSubmitter + 'static) -> (FormSession, Rc<RecordingNavigator>) {
    let navigator = Rc::new(RecordingNavigator::default());
    let session = FormSession::new(Rc::new(submitter), navigator.clone(), "/");
    (session, navigator)
}

fn fill_in(session: &mut FormSession) {
    for event in [
        FormEvent::ToggleEntry,
        FormEvent::EditTo("alice@example.com".to_string()),
        FormEvent::SelectFrom(SourceAccount::BTC),
        FormEvent::EditAmount("0.25".to_string()),
        FormEvent::EditDescription("coffee".to_string()),
    ] {
        assert!(session.send(event).is_none());
    }
}

fn assert_reset(session: &FormSession) {
    assert_eq!(session.state().phase(), FormPhase::Closed);
    assert_eq!(session.state().draft(), &PaymentDraft::default());
    assert!(session.state().outcome().is_none());
}

#[tokio::test]
async fn forced_success_shows_the_success_result() {
    let (mut session, navigator) = session_with(FixedStatusGateway::instant(200));
    fill_in(&mut session);
    session.submit().await;

    let state = session.state();
    assert_eq!(state.phase(), FormPhase::Result);
    let outcome = state.outcome().expect("result is shown");
    assert_eq!(outcome.kind(), OutcomeKind::Success);
    assert_eq!(
        outcome.message(),
        "Your payment has been processed successfully."
    );
    assert!(navigator.visited.borrow().is_empty());
}

#[tokio::test]
async fn forced_unauthorized_redirects_to_root() {
    let (mut session, navigator) = session_with(FixedStatusGateway::instant(401));
    fill_in(&mut session);
    session.submit().await;

    let outcome = session.state().outcome().expect("result is shown");
    assert_eq!(outcome.kind(), OutcomeKind::Unauthorized);
    assert_eq!(outcome.message(), "Unauthorized access");
    assert_eq!(session.state().phase(), FormPhase::Result);
    assert_eq!(*navigator.visited.borrow(), vec!["/".to_string()]);

    // Acknowledging afterwards does not navigate again.
    session.send(FormEvent::Acknowledge);
    assert_reset(&session);
    assert_eq!(navigator.visited.borrow().len(), 1);
}

#[tokio::test]
async fn redirect_target_is_configurable() {
    let navigator = Rc::new(RecordingNavigator::default());
    let mut session = FormSession::new(
        Rc::new(FixedStatusGateway::instant(401)),
        navigator.clone(),
        "/login",
    );
    fill_in(&mut session);
    session.submit().await;
    assert_eq!(*navigator.visited.borrow(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn unreachable_gateway_is_a_network_error() {
    let (mut session, navigator) = session_with(OfflineGateway::default());
    fill_in(&mut session);
    session.submit().await;

    let outcome = session.state().outcome().expect("result is shown");
    assert_eq!(outcome.kind(), OutcomeKind::NetworkError);
    assert_eq!(
        outcome.message(),
        "Network error: Unable to connect to the server."
    );
    assert!(navigator.visited.borrow().is_empty());
}

#[tokio::test]
async fn acknowledging_any_result_resets_everything() {
    for status in [200, 400, 401, 500, 503, 302] {
        let (mut session, _) = session_with(FixedStatusGateway::instant(status));
        fill_in(&mut session);
        session.submit().await;
        assert!(session.state().is_result_open(), "status {status}");

        session.send(FormEvent::Acknowledge);
        assert_reset(&session);
        assert!(!session.state().is_entry_open());
    }
}

#[tokio::test]
async fn cancel_without_submitting_never_shows_a_result() {
    let (mut session, navigator) = session_with(FixedStatusGateway::instant(200));
    fill_in(&mut session);
    session.send(FormEvent::Cancel);
    assert_reset(&session);

    // Cancel again with the dialog already closed.
    session.send(FormEvent::Cancel);
    assert_reset(&session);
    assert!(!session.state().is_result_open());
    assert!(navigator.visited.borrow().is_empty());
}

#[tokio::test]
async fn submit_is_a_no_op_until_the_form_is_valid() {
    let (mut session, _) = session_with(FixedStatusGateway::instant(200));
    session.send(FormEvent::ToggleEntry);
    session.send(FormEvent::EditTo("not-an-email".to_string()));
    session.send(FormEvent::SelectFrom(SourceAccount::ETH));
    session.send(FormEvent::EditAmount("10".to_string()));
    assert!(!session.state().can_submit());

    session.submit().await;
    assert_eq!(session.state().phase(), FormPhase::Editing);
    assert!(session.state().outcome().is_none());
}

#[tokio::test]
async fn double_submit_while_pending_dispatches_once() {
    let (mut session, _) = session_with(FixedStatusGateway::instant(200));
    fill_in(&mut session);

    let first = session.send(FormEvent::Submit).expect("first submit dispatches");
    assert!(session.send(FormEvent::Submit).is_none());
    assert!(matches!(
        session.state().phase(),
        FormPhase::Submitting { .. }
    ));

    session.complete(first).await;
    assert_eq!(
        session.state().outcome().map(|o| o.kind()),
        Some(OutcomeKind::Success)
    );
}

#[tokio::test]
async fn cancel_while_pending_still_shows_the_answer_and_redirects() {
    let (mut session, navigator) = session_with(FixedStatusGateway::instant(401));
    fill_in(&mut session);

    let pending = session.send(FormEvent::Submit).expect("submit dispatches");
    assert!(session.send(FormEvent::Cancel).is_none());
    assert!(session.state().phase().is_submitting());
    session.complete(pending).await;

    let state = session.state();
    assert_eq!(state.phase(), FormPhase::Result);
    assert_eq!(
        state.outcome().map(|o| o.kind()),
        Some(OutcomeKind::Unauthorized)
    );
    assert_eq!(*navigator.visited.borrow(), vec!["/".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn simulated_gateway_drives_the_form_to_a_result() {
    let (mut session, navigator) =
        session_with(SimulatedGateway::new(Duration::from_millis(1000)));

    for _ in 0..10 {
        fill_in(&mut session);
        session.submit().await;
        let kind = session
            .state()
            .outcome()
            .map(|o| o.kind())
            .expect("result is shown");
        assert!(matches!(
            kind,
            OutcomeKind::Success
                | OutcomeKind::BadRequest
                | OutcomeKind::Unauthorized
                | OutcomeKind::ServerError
        ));
        session.send(FormEvent::Acknowledge);
        assert_reset(&session);
    }

    assert!(navigator.visited.borrow().iter().all(|path| path == "/"));
}

#[tokio::test]
async fn form_can_be_reopened_after_a_result() {
    let (mut session, _) = session_with(FixedStatusGateway::instant(500));
    fill_in(&mut session);
    session.submit().await;
    session.send(FormEvent::Acknowledge);

    session.send(FormEvent::ToggleEntry);
    assert_eq!(session.state().phase(), FormPhase::Editing);
    assert_eq!(session.state().draft(), &PaymentDraft::default());
}
