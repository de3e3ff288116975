use dioxus::prelude::*;

use crate::features::overview::DescriptiveItem;

#[derive(Props, PartialEq, Clone)]
pub struct PaginatedItemProps {
    pub item: DescriptiveItem,
    #[props(default, !optional)]
    pub on_delete_item: Option<EventHandler<DescriptiveItem>>,
}

/// One row of the overview: name, description and the delete action when
/// the caller supplied one.
#[component]
pub fn PaginatedItem(props: PaginatedItemProps) -> Element {
    let item = props.item.clone();

    rsx! {
        div {
            class: "paginated-item",
            div {
                class: "paginated-item-header",
                span {
                    class: "paginated-item-name",
                    "{props.item.name}"
                }
                if let Some(on_delete) = props.on_delete_item {
                    button {
                        class: "paginated-item-delete",
                        onclick: move |_| on_delete.call(item.clone()),
                        "Remove"
                    }
                }
            }
            p {
                class: "paginated-item-description",
                "{props.item.description}"
            }
        }
    }
}
