//! Backend-configuration wizard wrapper: service meta, help assembly and
//! the delegated initial-values/submit helpers.

pub mod logic;
pub mod types;

pub use logic::{prepare_initial_values, submit_payload};
pub use types::{BackendMeta, HelpContent, WizardFormValues};
