use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct PageHeaderProps {
    pub title: String,
    #[props(default)]
    pub description: String,
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        header {
            class: "page-header",
            h1 {
                class: "page-header-title",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    class: "page-header-description",
                    "{props.description}"
                }
            }
        }
    }
}
