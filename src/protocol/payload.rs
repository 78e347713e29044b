use serde::Serialize;

use crate::domain::State;

/// Request body for creating a commit status.
///
/// Optional fields are left out of the JSON entirely when unset, so the
/// API keeps its own defaults instead of receiving explicit nulls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPayload {
    pub context: String,
    pub state: State,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
}

impl StatusPayload {
    pub fn new(state: State, context: impl Into<String>) -> Self {
        StatusPayload {
            context: context.into(),
            state,
            description: None,
            target_url: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_target_url(mut self, target_url: Option<String>) -> Self {
        self.target_url = target_url;
        self
    }
}
