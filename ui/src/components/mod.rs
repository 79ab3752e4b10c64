//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! `payment_form` is the widget itself; the rest are the pieces it is built from.
pub mod entry_dialog;
pub mod payment_form;
pub mod pico;
pub mod result_dialog;
