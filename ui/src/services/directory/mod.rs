pub mod roles;

pub use roles::{DirectoryLoader, Role, RoleDirectory};
