// Core types for the paginated overview - no dioxus imports needed here.
use serde::{Deserialize, Serialize};

use crate::components::layout::paginated_list::INITIAL_PAGE;

/// Page sizes offered by the overview paginator, smallest first. The
/// smallest entry doubles as the default page size.
pub const PAGE_SIZES: [u64; 3] = [5, 10, 30];

/// Pagination metadata describing one page of a filtered list view.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub total: u64,
    pub count: u64,
    pub page: u64,
    pub per_page: u64,
    pub query: String,
}

impl PaginationInfo {
    /// `count` can never exceed the page size or the number of matches.
    pub fn is_consistent(&self) -> bool {
        self.count <= self.per_page && self.count <= self.total
    }

    /// Apply a partial update, leaving untouched fields as they were.
    ///
    /// `total` and `count` always carry over: they only change when a load
    /// response replaces the whole struct.
    pub fn apply(&self, patch: PageInfoPatch) -> Self {
        Self {
            total: self.total,
            count: self.count,
            page: patch.page.unwrap_or(self.page),
            per_page: patch.per_page.unwrap_or(self.per_page),
            query: patch.query.unwrap_or_else(|| self.query.clone()),
        }
    }
}

impl Default for PaginationInfo {
    fn default() -> Self {
        Self {
            total: 0,
            count: 0,
            page: INITIAL_PAGE,
            per_page: PAGE_SIZES[0],
            query: String::new(),
        }
    }
}

/// Partial update for [`PaginationInfo`], built by the event handlers and
/// applied through [`PaginationInfo::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfoPatch {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub query: Option<String>,
}

impl PageInfoPatch {
    /// Patch for a paginator event: a new page and page size.
    pub fn turn_page(page: u64, per_page: u64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            query: None,
        }
    }

    /// Patch for a search event. A new query always starts back on the
    /// first page.
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            page: Some(INITIAL_PAGE),
            per_page: None,
            query: Some(query.into()),
        }
    }
}

/// Minimal identity + label + description record rendered as one row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DescriptiveItem {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// One page of items together with its pagination metadata.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PaginatedListType {
    pub pagination: PaginationInfo,
    pub list: Vec<DescriptiveItem>,
}

/// Local state of the overview widget.
///
/// `items == None` means no response has arrived yet, which is distinct
/// from an empty page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewState {
    pub pagination: PaginationInfo,
    pub items: Option<Vec<DescriptiveItem>>,
}

impl OverviewState {
    /// Replace local state with a load response. An absent response never
    /// reaches the state: the previous page stays visible.
    pub fn commit_response(&mut self, response: Option<PaginatedListType>) {
        let Some(PaginatedListType { pagination, list }) = response else {
            tracing::debug!("load resolved without a response, keeping the current page");
            return;
        };
        self.pagination = pagination;
        self.items = Some(list);
    }

    /// Whether the item list should render rows instead of the no-data
    /// placeholder.
    pub fn has_rows(&self) -> bool {
        self.items.as_ref().is_some_and(|list| !list.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_info() -> PaginationInfo {
        PaginationInfo {
            total: 12,
            count: 5,
            page: 2,
            per_page: 5,
            query: "admin".to_string(),
        }
    }

    fn response(total: u64, ids: &[&str]) -> PaginatedListType {
        PaginatedListType {
            pagination: PaginationInfo {
                total,
                count: ids.len() as u64,
                ..PaginationInfo::default()
            },
            list: ids
                .iter()
                .map(|id| DescriptiveItem {
                    id: id.to_string(),
                    name: format!("name-{id}"),
                    description: format!("description of {id}"),
                })
                .collect(),
        }
    }

    #[test]
    fn default_page_info_starts_on_the_first_page_with_the_smallest_size() {
        let info = PaginationInfo::default();
        assert_eq!(info.page, INITIAL_PAGE);
        assert_eq!(info.per_page, PAGE_SIZES[0]);
        assert_eq!(info.query, "");
        assert_eq!(info.total, 0);
        assert_eq!(info.count, 0);
    }

    #[test]
    fn search_patch_resets_the_page_and_keeps_everything_else() {
        let next = loaded_info().apply(PageInfoPatch::search("viewer"));
        assert_eq!(next.page, INITIAL_PAGE);
        assert_eq!(next.query, "viewer");
        assert_eq!(next.per_page, 5);
        assert_eq!(next.total, 12);
        assert_eq!(next.count, 5);
    }

    #[test]
    fn turn_page_patch_touches_only_the_page_fields() {
        let next = loaded_info().apply(PageInfoPatch::turn_page(3, 10));
        assert_eq!(next.page, 3);
        assert_eq!(next.per_page, 10);
        assert_eq!(next.query, "admin");
        assert_eq!(next.total, 12);
        assert_eq!(next.count, 5);
    }

    #[test]
    fn empty_patch_is_the_identity() {
        assert_eq!(loaded_info().apply(PageInfoPatch::default()), loaded_info());
    }

    #[test]
    fn commit_replaces_state_wholesale() {
        let mut state = OverviewState::default();
        let page = response(12, &["r1", "r2", "r3", "r4", "r5"]);
        state.commit_response(Some(page.clone()));

        assert_eq!(state.pagination, page.pagination);
        assert_eq!(state.items.as_deref(), Some(page.list.as_slice()));
    }

    #[test]
    fn absent_response_keeps_the_previous_state() {
        let mut state = OverviewState::default();
        state.commit_response(Some(response(2, &["r1", "r2"])));
        let before = state.clone();

        state.commit_response(None);
        assert_eq!(state, before);
    }

    #[test]
    fn rows_only_render_for_a_non_empty_loaded_page() {
        let mut state = OverviewState::default();
        assert!(!state.has_rows());

        state.commit_response(Some(response(0, &[])));
        assert!(!state.has_rows());

        state.commit_response(Some(response(1, &["r1"])));
        assert!(state.has_rows());
    }

    #[test]
    fn pagination_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(loaded_info()).unwrap();
        assert_eq!(json["perPage"], 5);
        assert_eq!(json["query"], "admin");
    }
}
