use api::form::reduce;
use api::form::FormEvent;
use api::form::FormState;
use api::session;
use dioxus::prelude::*;

use crate::app_state::AppState;

/// Handle on one payment form's state. `Copy`, so every event handler in
/// the component can hold its own.
#[derive(Clone, Copy, PartialEq)]
pub struct PaymentFormController {
    state: Signal<FormState>,
    app_state: Signal<AppState>,
}

impl PaymentFormController {
    /// The current state. Reading it subscribes the caller to changes.
    pub fn state(&self) -> Signal<FormState> {
        self.state
    }

    /// Runs `event` through the reducer and carries out what it asks for.
    ///
    /// A dispatch is spawned on the UI executor; its answer comes back
    /// through this same method.
    pub fn send(&mut self, event: FormEvent) {
        let current = self.state.peek().clone();
        let (next, effect) = reduce(current, event);
        self.state.set(next);

        let Some(effect) = effect else {
            return;
        };
        let app_state = self.app_state.peek().clone();
        let pending = session::execute(
            effect,
            app_state.navigator.as_ref(),
            app_state.prefs.unauthorized_redirect(),
        );
        if let Some(pending) = pending {
            let mut controller = *self;
            spawn(async move {
                let resolved = pending.perform(app_state.submitter.as_ref()).await;
                controller.send(resolved);
            });
        }
    }
}

/// Creates the state for a payment form wired to the [`AppState`] context.
pub fn use_payment_form() -> PaymentFormController {
    let app_state = use_context::<AppState>();
    let app_state = use_signal(move || app_state);
    let state = use_signal(FormState::default);
    PaymentFormController { state, app_state }
}
