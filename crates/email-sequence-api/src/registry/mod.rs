//! Client registry.

mod memory;

pub use memory::Registry;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A registered client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientRecord {
    /// Server-assigned identifier, starting at 1
    pub id: u64,

    /// Client display name
    pub name: Option<String>,

    /// Contact email address
    pub email: Option<String>,

    /// Company the client belongs to
    pub company: Option<String>,

    /// When the client was registered (local time)
    pub registered_at: DateTime<Local>,
}

impl ClientRecord {
    /// Create a record stamped with the current local time.
    pub fn new(
        id: u64,
        name: Option<String>,
        email: Option<String>,
        company: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            company,
            registered_at: Local::now(),
        }
    }

    /// Name used in human-readable messages.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serialization() {
        let record = ClientRecord::new(1, Some("Acme".into()), None, Some("Acme Inc".into()));
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Acme");
        assert!(json["email"].is_null());
        assert_eq!(json["company"], "Acme Inc");

        let registered_at = json["registered_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(registered_at).is_ok());
    }

    #[test]
    fn test_display_name() {
        let named = ClientRecord::new(1, Some("Acme".into()), None, None);
        assert_eq!(named.display_name(), "Acme");

        let unnamed = ClientRecord::new(2, None, None, None);
        assert_eq!(unnamed.display_name(), "");
    }
}
