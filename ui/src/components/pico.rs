//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

impl ButtonType {
    fn to_class(&self) -> &'static str {
        match self {
            ButtonType::Primary => "",
            ButtonType::Secondary => "secondary",
            ButtonType::Contrast => "contrast",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    /// Shows pico's spinner and sets `aria-busy`.
    #[props(default = false)]
    busy: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (props.outline, props.button_type.to_class()) {
        (true, "") => "outline".to_string(),
        (true, class) => format!("{class} outline"),
        (false, class) => class.to_string(),
    };
    rsx! {
        button {
            class: "{class_str}",
            disabled: props.disabled || props.busy,
            "aria-busy": if props.busy { "true" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    label: String,
    name: String,
    #[props(default = "text".to_string())]
    input_type: String,
    value: String,
    #[props(optional)]
    placeholder: Option<String>,
    /// Marks the field invalid and shows this text under it.
    #[props(!optional, default)]
    error: Option<String>,
    #[props(default = false)]
    disabled: bool,
    #[props(default = false)]
    autofocus: bool,
    on_input: EventHandler<String>,
}

/// A labeled form input field with an optional error hint.
pub fn Input(props: InputProps) -> Element {
    let helper_id = format!("{}-helper", props.name);
    rsx! {
        label {
            "{props.label}",
            input {
                r#type: "{props.input_type}",
                name: "{props.name}",
                value: "{props.value}",
                placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
                disabled: props.disabled,
                autofocus: props.autofocus,
                "aria-invalid": if props.error.is_some() { "true" } else { "" },
                "aria-describedby": "{helper_id}",
                oninput: move |evt| props.on_input.call(evt.value()),
            }
            if let Some(err) = &props.error {
                small { id: "{helper_id}", "{err}" }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SelectProps {
    label: String,
    name: String,
    /// The selected option's value, empty for none.
    value: String,
    /// `(value, text)` pairs.
    options: Vec<(String, String)>,
    #[props(default = false)]
    disabled: bool,
    on_change: EventHandler<String>,
}

/// A labeled `<select>` with a disabled placeholder shown while nothing is chosen.
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        label {
            "{props.label}",
            select {
                name: "{props.name}",
                disabled: props.disabled,
                onchange: move |evt| props.on_change.call(evt.value()),
                option {
                    value: "",
                    disabled: true,
                    selected: props.value.is_empty(),
                    "Select…"
                }
                for (value, text) in props.options.iter().cloned() {
                    option {
                        key: "{value}",
                        selected: props.value == value,
                        value: "{value}",
                        "{text}"
                    }
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    is_open: bool,
    title: String,
    /// Called on Escape or the header close link. Without it the modal can
    /// only be left through its own buttons.
    #[props(optional)]
    on_close: Option<EventHandler<()>>,
    children: Element,
}

pub fn Modal(props: ModalProps) -> Element {
    let on_close = props.on_close;
    rsx! {
        if props.is_open {
            dialog {
                open: true,
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        if let Some(handler) = &on_close {
                            handler.call(());
                        }
                    }
                },
                article {
                    header {
                        if let Some(handler) = on_close {
                            a {
                                href: "#",
                                "aria-label": "Close",
                                class: "close",
                                rel: "prev",
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    handler.call(());
                                }
                            }
                        }
                        h3 { style: "margin-bottom: 0;", "{props.title}" }
                    }
                    {props.children}
                }
            }
        }
    }
}
