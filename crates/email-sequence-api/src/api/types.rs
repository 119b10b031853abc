//! API request and response types.

use crate::error::ApiError;
use crate::registry::ClientRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Service information returned by the root route.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub status: String,
    pub message: String,
    pub endpoints: Vec<String>,
}

/// Request to register a client.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterClientRequest {
    /// Client display name
    pub name: Option<String>,

    /// Contact email address
    pub email: Option<String>,

    /// Company name
    pub company: Option<String>,
}

/// Response after registering a client.
#[derive(Debug, Serialize)]
pub struct RegisterClientResponse {
    pub client_id: u64,
    pub status: String,
    pub message: String,
}

/// Request to trigger an email sequence.
#[derive(Debug, Deserialize)]
pub struct TriggerSequenceRequest {
    /// Id returned by client registration
    pub client_id: Option<u64>,

    /// Sequence identifier understood by the automation system
    pub sequence_id: Option<String>,
}

impl TriggerSequenceRequest {
    /// Check that both fields are present.
    pub fn validate(self) -> Result<(u64, String), ApiError> {
        let client_id = self.client_id.ok_or(ApiError::MissingField("client_id"))?;
        let sequence_id = self
            .sequence_id
            .ok_or(ApiError::MissingField("sequence_id"))?;
        Ok((client_id, sequence_id))
    }
}

/// All registered clients.
#[derive(Debug, Serialize)]
pub struct ClientsResponse {
    pub clients: BTreeMap<u64, ClientRecord>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_fields_optional() {
        let request: RegisterClientRequest = serde_json::from_str("{}").unwrap();
        assert!(request.name.is_none());
        assert!(request.email.is_none());
        assert!(request.company.is_none());
    }

    #[test]
    fn test_trigger_request_validation() {
        let request: TriggerSequenceRequest =
            serde_json::from_str(r#"{"client_id": 1, "sequence_id": "welcome"}"#).unwrap();
        assert_eq!(request.validate().unwrap(), (1, "welcome".to_string()));

        let request: TriggerSequenceRequest =
            serde_json::from_str(r#"{"sequence_id": "welcome"}"#).unwrap();
        assert!(matches!(
            request.validate(),
            Err(ApiError::MissingField("client_id"))
        ));

        let request: TriggerSequenceRequest =
            serde_json::from_str(r#"{"client_id": 1}"#).unwrap();
        assert!(matches!(
            request.validate(),
            Err(ApiError::MissingField("sequence_id"))
        ));
    }

    #[test]
    fn test_clients_response_keys_serialize_as_strings() {
        let mut clients = BTreeMap::new();
        clients.insert(1, ClientRecord::new(1, Some("Acme".into()), None, None));
        let response = ClientsResponse { clients, total: 1 };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["clients"]["1"]["name"], "Acme");
        assert_eq!(json["total"], 1);
    }
}
