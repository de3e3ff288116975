//! Page-level compositions of the console fragment.

pub mod backend_create;
pub mod roles_overview;

pub use backend_create::BackendCreatePage;
pub use roles_overview::RolesOverviewPage;
