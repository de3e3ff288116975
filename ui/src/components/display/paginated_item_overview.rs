use dioxus::prelude::*;
use tracing::debug;

use crate::components::display::{EmptyResult, PaginatedItem};
use crate::components::forms::SearchForm;
use crate::components::layout::{PageChange, PaginatedList};
use crate::features::overview::{
    run_mount_load, run_page_load, DescriptiveItem, Loader, OverviewState, PageInfoPatch,
    PaginatedListType, PaginationInfo, PAGE_SIZES,
};
use crate::utils::cancellation::CancellationToken;

#[derive(Props, PartialEq, Clone)]
pub struct PaginatedItemOverviewProps {
    /// Supplies one page of items per request.
    pub on_load: Loader,
    /// Externally pushed replacement for the displayed page; bypasses the
    /// loader entirely.
    #[props(default, !optional)]
    pub override_list: Option<PaginatedListType>,
    #[props(default, !optional)]
    pub on_delete_item: Option<EventHandler<DescriptiveItem>>,
    /// Extra content rendered next to the search control, e.g. query
    /// syntax documentation.
    #[props(default, !optional)]
    pub query_helper: Option<Element>,
    #[props(default = "No items found to display.".to_string())]
    pub no_data_text: String,
}

/// Generic paginated list with a search box.
///
/// Holds the pagination state and the current page of items, drives the
/// loader on mount and on every page or query change, and falls back to
/// the no-data placeholder while nothing is loaded. The state machine
/// itself lives in `features::overview`.
#[component]
pub fn PaginatedItemOverview(props: PaginatedItemOverviewProps) -> Element {
    let mut state = use_signal(OverviewState::default);

    // The mount load is the only one racing against unmount; page and
    // search loads stay unguarded and the last response to resolve wins.
    let cancel = use_hook(CancellationToken::new);
    use_drop({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    use_future({
        let loader = props.on_load.clone();
        let cancel = cancel.clone();
        move || {
            let loader = loader.clone();
            let cancel = cancel.clone();
            async move {
                run_mount_load(loader, cancel, move |response| {
                    state.with_mut(|s| s.commit_response(response));
                })
                .await;
            }
        }
    });

    let override_list = props.override_list.clone();
    use_effect(use_reactive!(|(override_list,)| {
        if let Some(list) = override_list {
            debug!("overview received an override page");
            state.with_mut(|s| s.commit_response(Some(list)));
        }
    }));

    let run_load = use_callback({
        let loader = props.on_load.clone();
        move |next: PaginationInfo| {
            let loader = loader.clone();
            spawn(async move {
                run_page_load(loader, next, move |response| {
                    state.with_mut(|s| s.commit_response(response));
                })
                .await;
            });
        }
    });

    let on_page_change = move |change: PageChange| {
        let next = state
            .peek()
            .pagination
            .apply(PageInfoPatch::turn_page(change.page, change.per_page));
        run_load.call(next);
    };

    let on_search = move |query: String| {
        let next = state.peek().pagination.apply(PageInfoPatch::search(query));
        run_load.call(next);
    };

    let current = state();

    rsx! {
        PaginatedList {
            on_change: on_page_change,
            active_page: current.pagination.page,
            page_size: current.pagination.per_page,
            total_items: current.pagination.total,
            page_sizes: PAGE_SIZES.to_vec(),
            SearchForm {
                on_search: on_search,
                label: "Filter".to_string(),
                placeholder: "Enter query to filter".to_string(),
                search_button_label: "Filter".to_string(),
                query_helper: props.query_helper.clone(),
            }
            div {
                class: "paginated-item-overview",
                if current.has_rows() {
                    for item in current.items.clone().unwrap_or_default() {
                        PaginatedItem {
                            key: "{item.id}",
                            item: item.clone(),
                            on_delete_item: props.on_delete_item,
                        }
                    }
                } else {
                    EmptyResult {
                        "{props.no_data_text}"
                    }
                }
            }
        }
    }
}
