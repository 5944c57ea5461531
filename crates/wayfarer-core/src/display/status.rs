//! One-line outcome reports for commands that have no record to show.

use std::fmt;

use serde::Serialize;

/// Outcome of a command, rendered as a `Success:` or `Error:` line.
///
/// Serializes as `{"success": bool, "message": string}` for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationStatus {
    pub success: bool,
    pub message: String,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    fn prefix(&self) -> &'static str {
        if self.success {
            "Success:"
        } else {
            "Error:"
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.prefix(), self.message)
    }
}
