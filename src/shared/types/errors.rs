use thiserror::Error;

/// Result type for gateway operations
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// The gateway was used before a connection was bound.
    #[error("Configuration: {0}")]
    Configuration(String),

    /// A statement failed in the store, or a write matched no rows.
    #[error("Data access: {context}")]
    DataAccess {
        context: String,
        #[source]
        source: Option<sea_orm::DbErr>,
    },
}

impl DomainError {
    pub fn connection_not_set() -> Self {
        DomainError::Configuration("connection not set".to_string())
    }

    /// Wrap a store fault with the operation context it happened in.
    pub fn data_access(context: impl Into<String>, source: sea_orm::DbErr) -> Self {
        DomainError::DataAccess {
            context: context.into(),
            source: Some(source),
        }
    }

    /// A write that the store accepted but that touched no rows.
    pub fn no_rows_affected(context: impl Into<String>) -> Self {
        DomainError::DataAccess {
            context: context.into(),
            source: None,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, DomainError::Configuration(_))
    }

    pub fn is_data_access(&self) -> bool {
        matches!(self, DomainError::DataAccess { .. })
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
