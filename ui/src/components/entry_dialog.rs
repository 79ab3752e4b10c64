//=============================================================================
// File: src/components/entry_dialog.rs
//=============================================================================
use std::str::FromStr;

use api::form::FormEvent;
use api::source_account::SourceAccount;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Input;
use crate::components::pico::Modal;
use crate::components::pico::Select;
use crate::hooks::use_payment_form::PaymentFormController;

/// The modal that collects the payment fields.
#[component]
pub fn EntryDialog(mut controller: PaymentFormController) -> Element {
    let form = controller.state().read().clone();
    let draft = form.draft();
    let is_submitting = form.phase().is_submitting();

    let account_options: Vec<(String, String)> = SourceAccount::iter()
        .map(|account| (account.code().to_string(), account.code().to_string()))
        .collect();
    let selected_account = draft.from().map(|a| a.code()).unwrap_or_default();

    rsx! {
        Modal {
            is_open: form.is_entry_open(),
            title: "Payment Details".to_string(),
            Input {
                label: "To (Email)".to_string(),
                name: "to".to_string(),
                input_type: "email".to_string(),
                value: draft.to().to_string(),
                autofocus: true,
                disabled: is_submitting,
                error: draft.shows_email_error().then(|| "Invalid email format".to_string()),
                on_input: move |value: String| {
                    controller.send(FormEvent::EditTo(value));
                },
            }
            Select {
                label: "From".to_string(),
                name: "from".to_string(),
                value: selected_account.to_string(),
                options: account_options,
                disabled: is_submitting,
                on_change: move |value: String| {
                    if let Ok(account) = SourceAccount::from_str(&value) {
                        controller.send(FormEvent::SelectFrom(account));
                    }
                },
            }
            Input {
                label: "Amount".to_string(),
                name: "amount".to_string(),
                input_type: "number".to_string(),
                placeholder: "0.0".to_string(),
                value: draft.amount().to_string(),
                disabled: is_submitting,
                error: draft.shows_amount_error().then(|| "Invalid amount".to_string()),
                on_input: move |value: String| {
                    controller.send(FormEvent::EditAmount(value));
                },
            }
            Input {
                label: "Description (Optional)".to_string(),
                name: "description".to_string(),
                value: draft.description().to_string(),
                disabled: is_submitting,
                on_input: move |value: String| {
                    controller.send(FormEvent::EditDescription(value));
                },
            }
            footer {
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    disabled: is_submitting,
                    on_click: move |_| {
                        controller.send(FormEvent::Cancel);
                    },
                    "Cancel"
                }
                Button {
                    disabled: !form.can_submit(),
                    busy: is_submitting,
                    on_click: move |_| {
                        controller.send(FormEvent::Submit);
                    },
                    "Submit"
                }
            }
        }
    }
}
