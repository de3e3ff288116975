use dioxus::prelude::*;
use ui::features::wizard::{BackendMeta, HelpContent};
use ui::{BackendCreatePage, RolesOverviewPage};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/authentication/create")]
    BackendCreate {},
}

#[component]
fn Home() -> Element {
    rsx! {
        nav {
            class: "console-nav",
            Link { to: Route::BackendCreate {}, "Create authentication service" }
        }
        RolesOverviewPage {}
    }
}

#[component]
fn BackendCreate() -> Element {
    // Help a group-sync extension would contribute, injected explicitly
    // instead of being pulled from a plugin registry.
    let extension_help =
        HelpContent::new().with("groupSearchBase", "The base tree to limit the group search query to.");

    rsx! {
        nav {
            class: "console-nav",
            Link { to: Route::Home {}, "Back to roles" }
        }
        BackendCreatePage {
            meta: BackendMeta {
                service_title: "Directory Service".to_string(),
                service_type: "directory-service".to_string(),
            },
            extension_help: Some(extension_help),
        }
    }
}
