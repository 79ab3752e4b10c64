use std::ops::Deref;
use std::rc::Rc;

use api::gateway::PaymentSubmitter;
use api::navigation::Navigator;
use api::prefs::form_prefs::FormPrefs;

/// The collaborators the payment form is wired to.
pub struct AppStateData {
    pub prefs: FormPrefs,
    pub submitter: Rc<dyn PaymentSubmitter>,
    pub navigator: Rc<dyn Navigator>,
}

/// Stable, non-reactive state provided as a Dioxus context.
#[derive(Clone)]
pub struct AppState(Rc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    /// Builds the submitter described by `prefs`.
    pub fn new(prefs: FormPrefs, navigator: Rc<dyn Navigator>) -> Self {
        let submitter = prefs.gateway().submitter();
        Self::with_submitter(prefs, submitter, navigator)
    }

    /// Uses `submitter` regardless of what `prefs` asks for.
    pub fn with_submitter(
        prefs: FormPrefs,
        submitter: Rc<dyn PaymentSubmitter>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self(Rc::new(AppStateData {
            prefs,
            submitter,
            navigator,
        }))
    }
}
