// The client-side Dioxus application logic.

use std::rc::Rc;

use dioxus::prelude::*;

mod app_state;
pub mod compat;
mod components;
pub mod hooks;

use api::prefs::form_prefs::FormPrefs;
use app_state::AppState;
use compat::BrowserNavigator;
use components::payment_form::PaymentForm;
use components::pico::Container;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let payment_css = r#"
    /* --- RESULT DIALOG --- */
    .outcome-image {
        display: block;
        width: 6rem;
        height: 6rem;
        margin: 0 auto 1rem auto;
    }

    .outcome-success { color: var(--pico-ins-color); }
    .outcome-error { color: var(--pico-del-color); }

    /* --- DIALOG FOOTER --- */
    dialog footer {
        display: flex;
        justify-content: flex-end;
        gap: 1rem;
    }
    dialog footer button { margin-bottom: 0; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{payment_css}"
        }
        AppBody {}
    }
}

/// Wires the form to its collaborators once, then renders it.
#[component]
fn AppBody() -> Element {
    use_context_provider(|| {
        let prefs = FormPrefs::default();
        dioxus_logger::tracing::info!("prefs: {:#?}", prefs);
        AppState::new(prefs, Rc::new(BrowserNavigator))
    });

    rsx! {
        Container {
            h1 { "Payments" }
            PaymentForm {}
        }
    }
}
