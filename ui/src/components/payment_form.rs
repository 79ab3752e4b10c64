use api::form::FormEvent;
use dioxus::prelude::*;

use crate::components::entry_dialog::EntryDialog;
use crate::components::pico::Button;
use crate::components::result_dialog::ResultDialog;
use crate::hooks::use_payment_form::use_payment_form;

/// The trigger button plus both dialogs. Owns the form's state.
#[component]
pub fn PaymentForm() -> Element {
    let mut controller = use_payment_form();

    rsx! {
        div {
            Button {
                on_click: move |_| controller.send(FormEvent::ToggleEntry),
                "Payment Button"
            }
            EntryDialog { controller }
            ResultDialog { controller }
        }
    }
}
