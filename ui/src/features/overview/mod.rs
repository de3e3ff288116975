//! Paginated item overview: state, loader seam and async flows.
//!
//! The matching Dioxus component lives in
//! `components::display::paginated_item_overview`.

pub mod loader;
pub mod logic;
pub mod types;


pub use loader::{ItemLoader, Loader};
pub use logic::{run_mount_load, run_page_load};
pub use types::{
    DescriptiveItem, OverviewState, PageInfoPatch, PaginatedListType, PaginationInfo, PAGE_SIZES,
};
