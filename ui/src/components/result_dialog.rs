use api::form::FormEvent;
use api::outcome::OutcomeKind;
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::Modal;
use crate::hooks::use_payment_form::PaymentFormController;

const SUCCESS_IMAGE: Asset = asset!("/assets/success.svg");
const FAILED_IMAGE: Asset = asset!("/assets/failed.svg");

/// Success or failure, as far as the dialog's look is concerned.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Polarity {
    Success,
    Failure,
}

impl Polarity {
    pub fn of(kind: OutcomeKind) -> Self {
        if kind.is_success() {
            Self::Success
        } else {
            Self::Failure
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Payment Successful",
            Self::Failure => "Payment Failed",
        }
    }

    /// CSS class colouring the title and message.
    pub fn tone(&self) -> &'static str {
        match self {
            Self::Success => "outcome-success",
            Self::Failure => "outcome-error",
        }
    }

    fn image(&self) -> Asset {
        match self {
            Self::Success => SUCCESS_IMAGE,
            Self::Failure => FAILED_IMAGE,
        }
    }
}

/// The modal reporting how the submission went. OK resets the whole form.
#[component]
pub fn ResultDialog(mut controller: PaymentFormController) -> Element {
    let form = controller.state().read().clone();
    let Some(outcome) = form.outcome() else {
        return rsx! {};
    };
    let polarity = Polarity::of(outcome.kind());
    let message = outcome.message().to_string();

    rsx! {
        Modal {
            is_open: form.is_result_open(),
            title: polarity.title().to_string(),
            on_close: move |_| controller.send(FormEvent::Acknowledge),
            img {
                class: "outcome-image",
                src: polarity.image(),
                alt: polarity.title(),
            }
            p {
                class: polarity.tone(),
                "{message}"
            }
            footer {
                Button {
                    on_click: move |_| controller.send(FormEvent::Acknowledge),
                    "OK"
                }
            }
        }
    }
}
