pub mod use_payment_form;
