pub mod empty_result;
pub mod paginated_item;
pub mod paginated_item_overview;

pub use empty_result::*;
pub use paginated_item::*;
pub use paginated_item_overview::*;
