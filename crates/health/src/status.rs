//! The health status record.

use serde::{Deserialize, Serialize};

/// Status reported while the service is accepting requests.
pub const STATUS_UP: &str = "UP";

/// Version reported by the health endpoint.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Liveness information returned by a [`HealthService`](crate::HealthService).
///
/// Serializes as `{"status":"UP","version":"1.0.0"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

impl HealthStatus {
    /// Creates a health status with arbitrary field values.
    pub fn new(status: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            version: version.into(),
        }
    }

    /// Returns the status of a running service.
    pub fn up() -> Self {
        Self::new(STATUS_UP, SERVICE_VERSION)
    }

    /// Returns true if the status field reads `UP`.
    pub fn is_up(&self) -> bool {
        self.status == STATUS_UP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_has_fixed_fields() {
        let status = HealthStatus::up();
        assert_eq!(status.status, "UP");
        assert_eq!(status.version, "1.0.0");
        assert!(status.is_up());
    }

    #[test]
    fn serializes_with_exactly_two_keys() {
        let json = serde_json::to_value(HealthStatus::up()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["status"], "UP");
        assert_eq!(object["version"], "1.0.0");
    }

    #[test]
    fn serializes_fields_in_declaration_order() {
        let json = serde_json::to_string(&HealthStatus::up()).unwrap();
        assert_eq!(json, r#"{"status":"UP","version":"1.0.0"}"#);
    }

    #[test]
    fn is_up_false_for_other_status() {
        let status = HealthStatus::new("DOWN", SERVICE_VERSION);
        assert!(!status.is_up());
    }
}
