//! Dashboard Error Types
//!
//! Failures the refresh flow and product bootstrap can run into. None of
//! them reach the end user; they are logged and the last rendered state
//! stays on screen.

use thiserror::Error;

/// Dashboard error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// Network failure or non-success HTTP response
    #[error("Fetch error{}: {detail}", status_suffix(.status))]
    Fetch {
        /// HTTP status, absent when the request never completed
        status: Option<u16>,
        detail: String,
    },

    /// Response body did not have the expected shape
    #[error("Malformed data: {0}")]
    MalformedData(String),

    /// Chart or view surface rejected an update
    #[error("Render error: {0}")]
    Render(String),
}

impl DashboardError {
    /// Network-level failure with no HTTP status
    pub fn network(detail: impl Into<String>) -> Self {
        Self::Fetch {
            status: None,
            detail: detail.into(),
        }
    }

    /// Whether this error came from the transport or the HTTP status
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({s})")).unwrap_or_default()
}

/// Result alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_display_with_status() {
        let err = DashboardError::Fetch {
            status: Some(404),
            detail: "Product not found".to_string(),
        };
        assert_eq!(err.to_string(), "Fetch error (404): Product not found");
        assert!(err.is_fetch());
    }

    #[test]
    fn test_network_display() {
        let err = DashboardError::network("connection refused");
        assert_eq!(err.to_string(), "Fetch error: connection refused");
    }

    #[test]
    fn test_malformed_is_not_fetch() {
        let err = DashboardError::MalformedData("missing field".to_string());
        assert!(!err.is_fetch());
    }
}
