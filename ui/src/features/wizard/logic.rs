//! Initial values and submission for the wizard page. The wizard page
//! wrapper delegates both here, mirroring how the component tree keeps the
//! page itself thin.

use serde_json::{Map, Value};

use super::types::{BackendMeta, WizardFormValues};

/// Connection fields every directory-service backend starts from. Values
/// are placeholders the operator overwrites; the console does not
/// interpret them.
pub fn prepare_initial_values(_meta: &BackendMeta) -> WizardFormValues {
    WizardFormValues::new()
        .with("serverHost", "localhost")
        .with("serverPort", "636")
        .with("transportSecurity", "tls")
        .with("verifyCertificates", "true")
        .with("systemUserDn", "")
        .with("systemUserPassword", "")
        .with("userSearchBase", "")
        .with("userSearchPattern", "")
        .with("userNameAttribute", "")
}

/// Wire shape of a wizard submission: service identity plus the opaque
/// field map.
pub fn submit_payload(meta: &BackendMeta, values: &WizardFormValues) -> Value {
    let config: Map<String, Value> = values
        .entries()
        .into_iter()
        .map(|(field, value)| (field, Value::String(value)))
        .collect();

    serde_json::json!({
        "title": meta.service_title,
        "type": meta.service_type,
        "config": config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> BackendMeta {
        BackendMeta {
            service_title: "Directory Service".to_string(),
            service_type: "directory-service".to_string(),
        }
    }

    #[test]
    fn initial_values_cover_the_connection_fields() {
        let values = prepare_initial_values(&meta());
        assert_eq!(values.get("serverHost"), Some("localhost"));
        assert_eq!(values.get("serverPort"), Some("636"));
        assert_eq!(values.get("systemUserDn"), Some(""));
        assert!(!values.is_empty());
    }

    #[test]
    fn payload_carries_meta_and_the_edited_fields() {
        let mut values = prepare_initial_values(&meta());
        values.set("serverHost", "ldap.example.com");

        let payload = submit_payload(&meta(), &values);
        assert_eq!(payload["type"], "directory-service");
        assert_eq!(payload["title"], "Directory Service");
        assert_eq!(payload["config"]["serverHost"], "ldap.example.com");
        assert_eq!(payload["config"]["serverPort"], "636");
    }
}
