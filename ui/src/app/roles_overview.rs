use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::warn;

use crate::components::display::PaginatedItemOverview;
use crate::components::layout::PageHeader;
use crate::features::overview::{DescriptiveItem, Loader, PaginatedListType, PaginationInfo};
use crate::services::directory::{DirectoryLoader, RoleDirectory};

/// Roles page of the console: the paginated overview wired to the role
/// directory. Deleting a role refreshes the first page through the
/// override channel.
#[component]
pub fn RolesOverviewPage() -> Element {
    let directory = use_hook(|| Rc::new(RefCell::new(RoleDirectory::with_sample_roles())));
    let loader = use_hook({
        let directory = directory.clone();
        move || Loader::new(DirectoryLoader::new(directory.clone()))
    });
    let mut override_list = use_signal(|| None::<PaginatedListType>);

    let on_delete = {
        let directory = directory.clone();
        move |item: DescriptiveItem| {
            if let Err(error) = directory.borrow_mut().remove(&item.id) {
                warn!(%error, "could not delete role");
                return;
            }
            match directory.borrow().search(&PaginationInfo::default()) {
                Ok(refreshed) => override_list.set(Some(refreshed)),
                Err(error) => warn!(%error, "could not refresh roles after delete"),
            }
        }
    };

    rsx! {
        document::Title { "Roles Overview" }
        PageHeader {
            title: "Roles".to_string(),
            description: "Roles of the authentication service and what they grant.".to_string(),
        }
        PaginatedItemOverview {
            on_load: loader,
            override_list: override_list(),
            on_delete_item: Some(EventHandler::new(on_delete)),
            query_helper: Some(rsx! {
                span { "Searches role names and descriptions." }
            }),
            no_data_text: "No roles found to display.".to_string(),
        }
    }
}
