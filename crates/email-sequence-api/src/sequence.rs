//! Email sequence triggering.
//!
//! A trigger only acknowledges intent: it confirms the client exists, logs
//! the event for the downstream automation system and echoes a message.
//! No email is sent from here.

use crate::error::ApiError;
use crate::registry::Registry;
use serde::Serialize;
use tracing::info;

/// Confirmation returned for a started sequence.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SequenceStarted {
    pub status: String,
    pub client_id: u64,
    pub client_name: Option<String>,
    pub sequence_id: String,
    pub message: String,
}

/// Trigger `sequence_id` for the client with `client_id`.
pub fn trigger(
    registry: &Registry,
    client_id: u64,
    sequence_id: &str,
) -> Result<SequenceStarted, ApiError> {
    let client = registry
        .get(client_id)
        .ok_or(ApiError::ClientNotFound(client_id))?;

    info!(
        client_id,
        client_name = client.display_name(),
        sequence_id,
        "Sequence triggered"
    );

    Ok(SequenceStarted {
        status: "sequence_started".to_string(),
        client_id,
        client_name: client.name.clone(),
        sequence_id: sequence_id.to_string(),
        message: format!(
            "Email sequence {} started for {}",
            sequence_id,
            client.display_name()
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_registered_client() {
        let mut registry = Registry::new();
        let id = registry.register(Some("Acme".into()), Some("a@x.com".into()), None);

        let started = trigger(&registry, id, "welcome").unwrap();
        assert_eq!(started.status, "sequence_started");
        assert_eq!(started.client_id, id);
        assert_eq!(started.client_name.as_deref(), Some("Acme"));
        assert_eq!(started.sequence_id, "welcome");
        assert_eq!(started.message, "Email sequence welcome started for Acme");
    }

    #[test]
    fn test_trigger_unknown_client() {
        let mut registry = Registry::new();
        registry.register(Some("Acme".into()), None, None);

        let err = trigger(&registry, 99, "x").unwrap_err();
        assert!(matches!(err, ApiError::ClientNotFound(99)));
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_trigger_unnamed_client() {
        let mut registry = Registry::new();
        let id = registry.register(None, None, None);

        let started = trigger(&registry, id, "onboarding").unwrap();
        assert!(started.client_name.is_none());
    }
}
