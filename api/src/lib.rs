//! This crate contains everything about the payment form that is not UI:
//! the draft and its validation, the state machine, and the boundaries to
//! the payment gateway and to navigation.

pub mod compat;
pub mod draft;
pub mod form;
pub mod gateway;
pub mod navigation;
pub mod outcome;
pub mod prefs;
pub mod session;
pub mod source_account;
pub mod validation;
