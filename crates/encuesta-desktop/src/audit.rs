use serde::Serialize;
use tracing::info;

/// A structured audit event for survey and patient actions.
///
/// The backend keeps its own audit table; these application-level events
/// go through `tracing` so a support log shows what the operator did
/// without another round trip.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub username: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            username: username.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing, details payload included.
    pub fn emit(&self) {
        match &self.details {
            Some(details) => info!(
                audit.action = %self.action,
                audit.resource_type = %self.resource_type,
                audit.resource_id = %self.resource_id,
                audit.username = %self.username,
                audit.details = %details,
                "audit event"
            ),
            None => info!(
                audit.action = %self.action,
                audit.resource_type = %self.resource_type,
                audit.resource_id = %self.resource_id,
                audit.username = %self.username,
                "audit event"
            ),
        }
    }
}
