use dioxus::prelude::*;

/// First page of any paginated view.
pub const INITIAL_PAGE: u64 = 1;

/// Page sizes offered when the caller does not pass its own set.
const DEFAULT_PAGE_SIZES: [u64; 3] = [10, 50, 100];

/// Maximum number of numbered page buttons shown at once.
const PAGE_WINDOW: u64 = 10;

/// Page-change event emitted by the paginator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub page: u64,
    pub per_page: u64,
}

#[derive(Props, PartialEq, Clone)]
pub struct PaginatedListProps {
    pub on_change: EventHandler<PageChange>,
    pub active_page: u64,
    pub page_size: u64,
    pub total_items: u64,
    #[props(default = DEFAULT_PAGE_SIZES.to_vec())]
    pub page_sizes: Vec<u64>,
    pub children: Element,
}

/// Paginator shell: children first (search box, item list), page-size
/// select and numbered page buttons below.
#[component]
pub fn PaginatedList(props: PaginatedListProps) -> Element {
    let on_change = props.on_change;
    let per_page = props.page_size.max(1);
    let last_page = props.total_items.div_ceil(per_page).max(INITIAL_PAGE);
    let pages = page_window(props.active_page, last_page, PAGE_WINDOW);

    rsx! {
        div {
            class: "paginated-list",
            {props.children}
            div {
                class: "paginated-list-controls",
                select {
                    class: "paginated-list-page-size",
                    onchange: move |event| {
                        if let Ok(per_page) = event.value().parse::<u64>() {
                            // A new page size restarts from the first page.
                            on_change.call(PageChange { page: INITIAL_PAGE, per_page });
                        }
                    },
                    for size in props.page_sizes.clone() {
                        option {
                            value: "{size}",
                            selected: size == props.page_size,
                            "{size}"
                        }
                    }
                }
                nav {
                    class: "paginated-list-pages",
                    for page in pages {
                        button {
                            class: if page == props.active_page { "page-button active" } else { "page-button" },
                            onclick: move |_| on_change.call(PageChange { page, per_page }),
                            "{page}"
                        }
                    }
                }
            }
        }
    }
}

/// Bounded range of page numbers centered on the active page.
fn page_window(active: u64, last: u64, window: u64) -> std::ops::RangeInclusive<u64> {
    let start = active.saturating_sub(window / 2).max(INITIAL_PAGE);
    let end = start.saturating_add(window - 1).min(last);
    let start = end.saturating_sub(window - 1).max(INITIAL_PAGE);
    start..=end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_sticks_to_the_front_for_early_pages() {
        assert_eq!(page_window(1, 20, 10), 1..=10);
        assert_eq!(page_window(3, 20, 10), 1..=10);
    }

    #[test]
    fn window_centers_on_middle_pages() {
        assert_eq!(page_window(12, 20, 10), 7..=16);
    }

    #[test]
    fn window_clamps_to_the_last_page() {
        assert_eq!(page_window(20, 20, 10), 11..=20);
    }

    #[test]
    fn short_lists_show_all_pages() {
        assert_eq!(page_window(1, 3, 10), 1..=3);
        assert_eq!(page_window(1, 1, 10), 1..=1);
    }
}
