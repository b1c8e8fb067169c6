use std::fmt;

use thiserror::Error;

use crate::payments::PaymentError;

/// Database error kinds for the payment queue
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatabaseErrorKind {
    /// Connection pool is exhausted
    #[error("Database connection pool exhausted. Please try again.")]
    PoolExhausted,
    #[error("Database connection timed out. Please try again.")]
    ConnectionTimeout,
    #[error("{entity} with ID '{id}' not found")]
    NotFound { entity: String, id: String },
    /// Unique constraint violation (e.g., a second record for an order)
    #[error("A record with {column} '{value}' already exists")]
    UniqueConstraintViolation { column: String, value: String },
    /// Input rejected before or by the database
    #[error("Invalid payment data: {message}")]
    Validation { message: String },
    #[error("Database query failed: {message}")]
    QueryError { message: String },
    /// A stored row could not be mapped back to the domain
    #[error("Failed to decode stored row: {message}")]
    Decode { message: String },
    #[error("Database connection error: {message}")]
    ConnectionError { message: String },
    #[error("Database configuration error: {message}")]
    ConfigError { message: String },
    #[error("Unknown database error: {message}")]
    Unknown { message: String },
}

/// Result type for database operations
pub type DbResult<T> = Result<T, DatabaseError>;

#[derive(Debug, Clone)]
pub struct DatabaseError {
    pub kind: DatabaseErrorKind,
    pub context: Option<String>,
    pub is_retryable: bool,
}

impl DatabaseError {
    pub fn new(kind: DatabaseErrorKind) -> Self {
        let is_retryable = matches!(
            kind,
            DatabaseErrorKind::ConnectionTimeout
                | DatabaseErrorKind::PoolExhausted
                | DatabaseErrorKind::ConnectionError { .. }
        );

        Self {
            kind,
            context: None,
            is_retryable,
        }
    }

    pub fn not_found<E: Into<String>, I: ToString>(entity: E, id: I) -> Self {
        Self::new(DatabaseErrorKind::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        })
    }

    pub fn with_context<S: Into<String>>(mut self, context: S) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn is_retryable(&self) -> bool {
        self.is_retryable
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, DatabaseErrorKind::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.kind, DatabaseErrorKind::Validation { .. })
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self.kind, DatabaseErrorKind::UniqueConstraintViolation { .. })
    }

    /// Map SQLx error to our custom error type
    pub fn from_sqlx(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => Self::not_found("Record", "unknown"),
            sqlx::Error::PoolTimedOut => Self::new(DatabaseErrorKind::PoolExhausted),
            sqlx::Error::PoolClosed => Self::new(DatabaseErrorKind::ConnectionError {
                message: "Connection pool is closed".to_string(),
            }),
            sqlx::Error::Configuration(msg) => Self::new(DatabaseErrorKind::ConfigError {
                message: msg.to_string(),
            }),
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                // Postgres unique_violation
                Some("23505") => Self::new(DatabaseErrorKind::UniqueConstraintViolation {
                    column: db_err.constraint().unwrap_or("unknown").to_string(),
                    value: "provided value".to_string(),
                }),
                // Postgres check_violation
                Some("23514") => Self::new(DatabaseErrorKind::Validation {
                    message: db_err.message().to_string(),
                }),
                _ => Self::new(DatabaseErrorKind::QueryError {
                    message: db_err.message().to_string(),
                }),
            },
            sqlx::Error::Io(io_err) => Self::new(DatabaseErrorKind::ConnectionError {
                message: io_err.to_string(),
            }),
            sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_) => Self::new(DatabaseErrorKind::Decode {
                message: error.to_string(),
            }),
            _ => Self::new(DatabaseErrorKind::Unknown {
                message: error.to_string(),
            }),
        }
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        Self::from_sqlx(error)
    }
}

impl From<PaymentError> for DatabaseError {
    fn from(error: PaymentError) -> Self {
        Self::new(DatabaseErrorKind::Validation {
            message: error.to_string(),
        })
    }
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(context) => write!(f, "{} ({})", self.kind, context),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for DatabaseError {}

impl PartialEq for DatabaseError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}
