use dioxus::prelude::*;

use crate::components::inputs::TextInput;
use crate::features::wizard::{BackendMeta, HelpContent, WizardFormValues};

#[derive(Props, PartialEq, Clone)]
pub struct BackendWizardProps {
    pub meta: BackendMeta,
    pub help: HelpContent,
    pub initial_values: WizardFormValues,
    pub on_submit: EventHandler<WizardFormValues>,
}

/// Thin configuration wizard: one labeled input per field, the field's
/// help underneath, submission delegated to the caller. Field meaning is
/// opaque at this layer.
#[component]
pub fn BackendWizard(props: BackendWizardProps) -> Element {
    let mut values = use_signal({
        let initial = props.initial_values.clone();
        move || initial.clone()
    });
    let on_submit = props.on_submit;
    let current = values();

    rsx! {
        div {
            class: "backend-wizard",
            h2 {
                class: "backend-wizard-title",
                "Configure {props.meta.service_title}"
            }
            for (field, value) in current.entries() {
                div {
                    key: "{field}",
                    class: "backend-wizard-field",
                    label {
                        class: "backend-wizard-label",
                        "{field}"
                    }
                    TextInput {
                        value: value.clone(),
                        placeholder: String::new(),
                        input_class: "backend-wizard-input".to_string(),
                        on_change: {
                            let field = field.clone();
                            move |next: String| values.with_mut(|v| v.set(&field, next))
                        },
                    }
                    if let Some(help) = props.help.get(&field) {
                        p {
                            class: "backend-wizard-help",
                            "{help}"
                        }
                    }
                }
            }
            button {
                class: "backend-wizard-submit",
                onclick: move |_| on_submit.call(values()),
                "Create service"
            }
        }
    }
}
