//! In-memory role directory backing the roles overview.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use tracing::warn;

use crate::features::overview::{DescriptiveItem, ItemLoader, PaginatedListType, PaginationInfo};
use crate::services::errors::{DirectoryError, DirectoryResult};
use crate::utils::cancellation::CancellationToken;

/// One role of the authentication service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl Role {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    fn to_item(&self) -> DescriptiveItem {
        DescriptiveItem {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// Ordered role store with free-text search and page slicing.
#[derive(Debug, Clone, Default)]
pub struct RoleDirectory {
    roles: Vec<Role>,
}

impl RoleDirectory {
    pub fn new(roles: Vec<Role>) -> Self {
        Self { roles }
    }

    /// Seeded demo directory; twelve roles, so several pages exist at the
    /// default page size.
    pub fn with_sample_roles() -> Self {
        Self::new(vec![
            Role::new("role-admin", "Admin", "Grants every permission on the console"),
            Role::new("role-reader", "Reader", "Read-only access to the console"),
            Role::new("role-dashboard-creator", "Dashboard Creator", "Can create and edit dashboards"),
            Role::new("role-dashboard-viewer", "Dashboard Viewer", "Can open shared dashboards"),
            Role::new("role-alert-manager", "Alert Manager", "Manages alert definitions and notifications"),
            Role::new("role-report-scheduler", "Report Scheduler", "Schedules and distributes reports"),
            Role::new("role-stream-writer", "Stream Writer", "Writes messages into managed streams"),
            Role::new("role-index-operator", "Index Operator", "Rotates and maintains indices"),
            Role::new("role-auditor", "Auditor", "Reviews the audit trail"),
            Role::new("role-support", "Support", "Handles end-user support requests"),
            Role::new("role-operator", "Operator", "Keeps day-to-day ingestion running"),
            Role::new("role-provisioner", "Provisioner", "Provisions users and teams"),
        ])
    }

    /// One page of roles matching the query.
    ///
    /// Zero matches are a successful empty page, not an error.
    pub fn search(&self, page_info: &PaginationInfo) -> DirectoryResult<PaginatedListType> {
        if page_info.per_page == 0 {
            return Err(DirectoryError::InvalidPageSize {
                per_page: page_info.per_page,
            });
        }

        let needle = page_info.query.trim().to_lowercase();
        let matches: Vec<&Role> = self
            .roles
            .iter()
            .filter(|role| needle.is_empty() || role.matches(&needle))
            .collect();

        let total = matches.len() as u64;
        let start = page_info.page.saturating_sub(1).saturating_mul(page_info.per_page);
        let list: Vec<DescriptiveItem> = matches
            .iter()
            .skip(start as usize)
            .take(page_info.per_page as usize)
            .map(|role| role.to_item())
            .collect();

        Ok(PaginatedListType {
            pagination: PaginationInfo {
                total,
                count: list.len() as u64,
                page: page_info.page,
                per_page: page_info.per_page,
                query: page_info.query.clone(),
            },
            list,
        })
    }

    pub fn remove(&mut self, id: &str) -> DirectoryResult<()> {
        let position = self
            .roles
            .iter()
            .position(|role| role.id == id)
            .ok_or_else(|| DirectoryError::UnknownRole { id: id.to_string() })?;
        self.roles.remove(position);
        Ok(())
    }
}

/// Adapts the directory to the overview's loader seam.
///
/// Failures are this layer's responsibility: they are logged and collapsed
/// into an absent response, so the widget keeps its current page.
#[derive(Clone)]
pub struct DirectoryLoader {
    directory: Rc<RefCell<RoleDirectory>>,
}

impl DirectoryLoader {
    pub fn new(directory: Rc<RefCell<RoleDirectory>>) -> Self {
        Self { directory }
    }
}

#[async_trait(?Send)]
impl ItemLoader for DirectoryLoader {
    async fn load(
        &self,
        page_info: &PaginationInfo,
        cancel: &CancellationToken,
    ) -> Option<PaginatedListType> {
        if cancel.is_cancelled() {
            return None;
        }
        match self.directory.borrow().search(page_info) {
            Ok(page) => Some(page),
            Err(error) => {
                warn!(%error, "role directory search failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(page: u64, per_page: u64, query: &str) -> PaginationInfo {
        PaginationInfo {
            page,
            per_page,
            query: query.to_string(),
            ..PaginationInfo::default()
        }
    }

    #[test]
    fn first_page_of_an_unfiltered_search() {
        let directory = RoleDirectory::with_sample_roles();
        let page = directory.search(&info(1, 5, "")).unwrap();

        assert_eq!(page.pagination.total, 12);
        assert_eq!(page.pagination.count, 5);
        assert_eq!(page.list.len(), 5);
        assert_eq!(page.list[0].id, "role-admin");
        assert!(page.pagination.is_consistent());
    }

    #[test]
    fn the_last_page_is_short() {
        let directory = RoleDirectory::with_sample_roles();
        let page = directory.search(&info(3, 5, "")).unwrap();

        assert_eq!(page.pagination.count, 2);
        assert_eq!(page.list.len(), 2);
        assert!(page.pagination.is_consistent());
    }

    #[test]
    fn out_of_range_pages_are_empty_but_keep_the_total() {
        let directory = RoleDirectory::with_sample_roles();
        let page = directory.search(&info(9, 5, "")).unwrap();

        assert_eq!(page.pagination.total, 12);
        assert_eq!(page.pagination.count, 0);
        assert!(page.list.is_empty());
    }

    #[test]
    fn queries_match_names_case_insensitively() {
        let directory = RoleDirectory::with_sample_roles();
        let page = directory.search(&info(1, 30, "DASHBOARD")).unwrap();

        assert_eq!(page.pagination.total, 2);
        assert_eq!(page.pagination.query, "DASHBOARD");
    }

    #[test]
    fn queries_also_match_descriptions() {
        let directory = RoleDirectory::with_sample_roles();
        let page = directory.search(&info(1, 30, "ingestion")).unwrap();

        assert_eq!(page.pagination.total, 1);
        assert_eq!(page.list[0].name, "Operator");
    }

    #[test]
    fn no_matches_is_an_empty_success() {
        let directory = RoleDirectory::with_sample_roles();
        let page = directory.search(&info(1, 5, "foo")).unwrap();

        assert_eq!(page.pagination.total, 0);
        assert_eq!(page.pagination.count, 0);
        assert!(page.list.is_empty());
    }

    #[test]
    fn a_zero_page_size_is_rejected() {
        let directory = RoleDirectory::with_sample_roles();
        assert_eq!(
            directory.search(&info(1, 0, "")),
            Err(DirectoryError::InvalidPageSize { per_page: 0 })
        );
    }

    #[test]
    fn removing_a_role_shrinks_the_directory_once() {
        let mut directory = RoleDirectory::with_sample_roles();
        directory.remove("role-admin").unwrap();

        assert_eq!(
            directory.remove("role-admin"),
            Err(DirectoryError::UnknownRole {
                id: "role-admin".to_string()
            })
        );
        assert_eq!(directory.search(&info(1, 30, "")).unwrap().pagination.total, 11);
    }
}
