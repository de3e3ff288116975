//! User Interface Components
//!
//! Reusable Dioxus components for the administration console:
//!
//! - **display**: item rows, the paginated item overview and the
//!   empty-state placeholder
//! - **forms**: search form and the backend configuration wizard
//! - **layout**: page header and the paginator shell
//! - **inputs**: shared form controls

pub mod display;
pub mod forms;
pub mod inputs;
pub mod layout;
