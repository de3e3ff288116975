use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct TextInputProps {
    pub value: String,
    pub placeholder: String,
    #[props(default)]
    pub input_class: String,
    #[props(default)]
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    rsx! {
        input {
            class: "{props.input_class}",
            r#type: "text",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}
