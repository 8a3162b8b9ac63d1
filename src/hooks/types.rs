//! Hook context

use uuid::Uuid;

/// Per-call context handed to every hook
///
/// Built once by the client for each API call and shared read-only with
/// all hooks of that call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookContext {
    operation_id: String,
    call_id: Uuid,
}

impl HookContext {
    /// Create a context for one call of `operation_id`
    pub fn new(operation_id: impl Into<String>) -> Self {
        Self {
            operation_id: operation_id.into(),
            call_id: Uuid::new_v4(),
        }
    }

    /// Operation id of the call, e.g. `updateNPAPrivateApp`
    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }

    /// Unique id of this call, for correlating log lines
    pub fn call_id(&self) -> Uuid {
        self.call_id
    }

    /// Exact match against an operation id
    pub fn is_operation(&self, operation_id: &str) -> bool {
        self.operation_id == operation_id
    }
}
