//! Normalized results handed to the presentation layer.

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// The operations `RequestExecutor` offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    FetchCollection,
    FetchResource,
    CreateResource,
    ReplaceResource,
    DeleteResource,
}

impl Operation {
    /// Short label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::FetchCollection | Operation::FetchResource => "GET",
            Operation::CreateResource => "POST",
            Operation::ReplaceResource => "PUT",
            Operation::DeleteResource => "DELETE",
        }
    }
}

/// Success or failure of a single request, independent of the transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseOutcome {
    Success { status: u16, payload: Value },
    /// `status` is `None` when no response arrived.
    Failure { status: Option<u16>, message: String },
}

impl ResponseOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseOutcome::Success { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ResponseOutcome::Success { status, .. } => Some(*status),
            ResponseOutcome::Failure { status, .. } => *status,
        }
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            ResponseOutcome::Success { payload, .. } => Some(payload),
            ResponseOutcome::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ResponseOutcome::Success { .. } => None,
            ResponseOutcome::Failure { message, .. } => Some(message),
        }
    }
}

impl From<ApiError> for ResponseOutcome {
    fn from(err: ApiError) -> Self {
        ResponseOutcome::Failure {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

/// What one call to `RequestExecutor` produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayResult {
    pub operation: Operation,
    pub outcome: ResponseOutcome,
}

impl DisplayResult {
    pub fn label(&self) -> &'static str {
        self.operation.label()
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    /// One-line summary for a status area.
    pub fn status_message(&self) -> String {
        match &self.outcome {
            ResponseOutcome::Success { status, .. } => {
                format!("{} OK (HTTP {status})", self.label())
            }
            ResponseOutcome::Failure { message, .. } => {
                format!("{} failed: {message}", self.label())
            }
        }
    }
}
