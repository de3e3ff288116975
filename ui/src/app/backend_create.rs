use dioxus::prelude::*;
use tracing::info;

use crate::components::forms::BackendWizard;
use crate::components::layout::PageHeader;
use crate::features::wizard::{
    prepare_initial_values, submit_payload, BackendMeta, HelpContent, WizardFormValues,
};

/// Base help shown for every directory-service backend.
fn base_help() -> HelpContent {
    HelpContent::new()
        .with(
            "systemUserDn",
            "The username for the initial connection to the directory server, e.g. ldapbind@some.domain.",
        )
        .with(
            "systemUserPassword",
            "The password for the initial connection to the directory server.",
        )
        .with(
            "userSearchBase",
            "The base tree to limit the user search query to, e.g. cn=users,dc=example,dc=com.",
        )
        .with(
            "userSearchPattern",
            "The search pattern used to find the login user; {0} is replaced by the entered username.",
        )
        .with(
            "userNameAttribute",
            "Which attribute holds the display name of the user, e.g. displayName.",
        )
}

#[derive(Props, PartialEq, Clone)]
pub struct BackendCreatePageProps {
    pub meta: BackendMeta,
    /// Supplementary help injected by an optional extension, merged over
    /// the base help; colliding keys win.
    #[props(default, !optional)]
    pub extension_help: Option<HelpContent>,
}

/// Page wrapper around the wizard: document title, header, assembled help
/// and the delegated initial-values/submit pair.
#[component]
pub fn BackendCreatePage(props: BackendCreatePageProps) -> Element {
    let help = match &props.extension_help {
        Some(extension) => base_help().merged_with(extension),
        None => base_help(),
    };
    let initial_values = prepare_initial_values(&props.meta);

    let meta = props.meta.clone();
    let on_submit = move |values: WizardFormValues| {
        let payload = submit_payload(&meta, &values);
        info!(%payload, "backend wizard submitted");
    };

    rsx! {
        document::Title { "Create {props.meta.service_title} Authentication Service" }
        PageHeader {
            title: format!("Create {} authentication service", props.meta.service_title),
            description: "Connection settings for the new authentication backend.".to_string(),
        }
        BackendWizard {
            meta: props.meta.clone(),
            help: help,
            initial_values: initial_values,
            on_submit: on_submit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_help_overrides_the_base_entries() {
        let extension = HelpContent::new().with("userSearchBase", "injected text");
        let merged = base_help().merged_with(&extension);

        assert_eq!(merged.get("userSearchBase"), Some("injected text"));
        assert!(merged.get("systemUserDn").is_some());
    }
}
