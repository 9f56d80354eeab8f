//! Failures a summary provider can report.
//!
//! There are four kinds: the provider is unreachable, it did not answer in
//! time, the requested player does not exist, or a write was rejected during
//! import. Each carries an [`ErrorContext`] naming the operation and entity so
//! a failure can be logged or surfaced without losing where it came from.

use std::fmt;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Where a provider failure happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Provider operation, e.g. `get_player_summary` or `store_game`
    pub operation: Option<String>,
    /// Entity kind involved (`player`, `game`, `team`, `stat line`)
    pub entity: Option<String>,
    pub entity_id: Option<String>,
    /// Set for failures a caller may try again later
    pub retryable: bool,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("operation", self.operation.as_deref()),
            ("entity", self.entity.as_deref()),
            ("id", self.entity_id.as_deref()),
        ];
        let mut parts: Vec<String> = fields
            .iter()
            .filter_map(|(key, value)| value.map(|v| format!("{key}={v}")))
            .collect();
        if self.retryable {
            parts.push("retryable=true".to_string());
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The provider could not be reached.
    #[error("Provider unavailable: {message} {context}")]
    ConnectionError {
        message: String,
        context: ErrorContext,
    },

    /// The provider did not answer in time.
    #[error("Provider timed out: {message} {context}")]
    TimeoutError {
        message: String,
        context: ErrorContext,
    },

    /// No such player.
    #[error("Not found: {message} {context}")]
    NotFound {
        message: String,
        context: ErrorContext,
    },

    /// An import write was refused (duplicate key, dangling reference, bad date).
    #[error("Rejected: {message} {context}")]
    ValidationError {
        message: String,
        context: ErrorContext,
    },
}

impl RepositoryError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::ConnectionError {
            message: message.into(),
            context: ErrorContext {
                retryable: true,
                ..Default::default()
            },
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::TimeoutError {
            message: message.into(),
            context: ErrorContext {
                retryable: true,
                ..Default::default()
            },
        }
    }

    pub fn not_found(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::NotFound {
            message: message.into(),
            context,
        }
    }

    pub fn rejected(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ValidationError {
            message: message.into(),
            context,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.context().retryable
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::ConnectionError { context, .. }
            | Self::TimeoutError { context, .. }
            | Self::NotFound { context, .. }
            | Self::ValidationError { context, .. } => context,
        }
    }

    /// Replace the operation recorded in the context.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        let (Self::ConnectionError { context, .. }
        | Self::TimeoutError { context, .. }
        | Self::NotFound { context, .. }
        | Self::ValidationError { context, .. }) = &mut self;
        context.operation = Some(operation.into());
        self
    }
}
