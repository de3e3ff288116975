//! Async flows driving the overview state.
//!
//! The flows report through a commit callback instead of touching UI state
//! directly, so they run identically under the component and under tests.

use tracing::debug;

use crate::utils::cancellation::CancellationToken;

use super::loader::Loader;
use super::types::{PaginatedListType, PaginationInfo};

/// Initial load issued when the overview mounts.
///
/// The response is committed only while `cancel` is still live; an unmount
/// in the meantime cancels the token and the response is dropped without a
/// state change.
pub async fn run_mount_load<F>(loader: Loader, cancel: CancellationToken, commit: F)
where
    F: FnOnce(Option<PaginatedListType>),
{
    let response = loader.load(&PaginationInfo::default(), &cancel).await;
    if cancel.is_cancelled() {
        debug!("overview unmounted before the initial load resolved");
        return;
    }
    commit(response);
}

/// Load issued for a page turn or a new query.
///
/// Overlapping calls are deliberately left unguarded: the last response to
/// resolve wins, whichever request it belongs to.
pub async fn run_page_load<F>(loader: Loader, page_info: PaginationInfo, commit: F)
where
    F: FnOnce(Option<PaginatedListType>),
{
    let response = loader.load(&page_info, &CancellationToken::new()).await;
    commit(response);
}
