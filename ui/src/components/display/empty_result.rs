use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct EmptyResultProps {
    pub children: Element,
}

/// Placeholder shown when a list view has nothing to display.
#[component]
pub fn EmptyResult(props: EmptyResultProps) -> Element {
    rsx! {
        div {
            class: "empty-result",
            {props.children}
        }
    }
}
