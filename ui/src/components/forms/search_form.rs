use dioxus::prelude::*;

use crate::components::inputs::TextInput;

#[derive(Props, PartialEq, Clone)]
pub struct SearchFormProps {
    pub on_search: EventHandler<String>,
    #[props(default = "Search".to_string())]
    pub label: String,
    #[props(default = "Enter search query".to_string())]
    pub placeholder: String,
    #[props(default = "Search".to_string())]
    pub search_button_label: String,
    #[props(default, !optional)]
    pub query_helper: Option<Element>,
}

/// Free-text filter control with an explicit submit, a reset and an
/// optional helper element explaining the query syntax.
#[component]
pub fn SearchForm(props: SearchFormProps) -> Element {
    let mut query = use_signal(String::new);
    let on_search = props.on_search;

    rsx! {
        div {
            class: "search-form",
            label {
                class: "search-form-label",
                "{props.label}"
            }
            TextInput {
                value: query(),
                placeholder: props.placeholder.clone(),
                input_class: "search-form-input".to_string(),
                on_change: move |value: String| query.set(value),
            }
            button {
                class: "search-form-submit",
                onclick: move |_| on_search.call(query()),
                "{props.search_button_label}"
            }
            button {
                class: "search-form-reset",
                onclick: move |_| {
                    query.set(String::new());
                    on_search.call(String::new());
                },
                "Reset"
            }
            if let Some(helper) = props.query_helper.clone() {
                span {
                    class: "search-form-helper",
                    {helper}
                }
            }
        }
    }
}
