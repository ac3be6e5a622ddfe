use dioxus::prelude::*;
use rust_i18n::t;

use torneo_types::errors::ValidationError;

/// Everything an edit page shows besides the field values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormContext {
    /// Where the page goes back to after a save or on cancel.
    pub return_to: String,
    /// (field, message) pairs.
    pub errors: Vec<(String, String)>,
    pub failure: Option<String>,
}

impl FormContext {
    pub fn new(return_to: &str) -> Self {
        Self {
            return_to: return_to.to_string(),
            ..Default::default()
        }
    }

    pub fn with_validation(mut self, errors: &[ValidationError]) -> Self {
        self.errors = errors
            .iter()
            .map(|e| (e.field().to_string(), validation_message(e)))
            .collect();
        self
    }

    pub fn with_failure(mut self, failure: Option<String>) -> Self {
        self.failure = failure;
        self
    }

    pub fn errors_for(&self, field: &str) -> Vec<String> {
        self.errors
            .iter()
            .filter(|(f, _)| f == field)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

fn validation_message(error: &ValidationError) -> String {
    match error {
        ValidationError::Required { .. } => t!("validation.required").to_string(),
        ValidationError::Min { min, .. } => t!("validation.min", min = min).to_string(),
    }
}

#[component]
pub fn FieldErrors(messages: Vec<String>) -> Element {
    rsx! {
        for message in messages {
            small { class: "block text-xs text-red-600 error", "{message}" }
        }
    }
}

/// Labelled input bound to one form field.
#[component]
pub fn TextField(
    label: String,
    name: String,
    value: String,
    input_type: String,
    required: bool,
    errors: Vec<String>,
) -> Element {
    rsx! {
        div { class: "mb-3",
            label { class: "block text-xs font-bold text-gray-500 mb-1 uppercase",
                "{label}"
            }
            input {
                id: "field_{name}",
                r#type: "{input_type}",
                class: "input-field",
                name: "{name}",
                value: "{value}",
                required: required,
            }
            FieldErrors { messages: errors }
        }
    }
}

#[component]
pub fn FormActions(return_to: String) -> Element {
    let cancel = t!("common.cancel");
    let save = t!("common.save");

    rsx! {
        div { class: "flex gap-3 mt-4",
            a { class: "btn-gray", href: "{return_to}", "{cancel}" }
            button { r#type: "submit", class: "btn-green", "{save}" }
        }
    }
}
