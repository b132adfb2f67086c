use thiserror::Error;

/// Result type alias using ValkitError
pub type Result<T> = std::result::Result<T, ValkitError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Access
    NotFound,

    // Type checks
    InvalidType,

    // Integration
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidType => "ERR_INVALID_TYPE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and the
/// originating path and source label for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    source_label: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            source_label: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the dotted path that failed to resolve
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add the label of the object the path was resolved against
    pub fn with_source_label(mut self, label: impl Into<String>) -> Self {
        self.source_label = Some(label.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the source label, if any
    pub fn source_label(&self) -> Option<&str> {
        self.source_label.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for valkit operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValkitError {
    /// A path did not resolve and the accessor was configured to throw
    #[error("Property {path} not found in {source_label}")]
    PropertyNotFound { path: String, source_label: String },

    /// One or more type tags are unknown and no known tag matched
    #[error("Invalid type [{}]", .names.join(","))]
    InvalidType { names: Vec<String> },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<ValkitError> for ExError {
    fn from(err: ValkitError) -> Self {
        match err {
            ValkitError::PropertyNotFound { path, source_label } => {
                let message = format!("Property {} not found in {}", path, source_label);
                ExError::new(ExErrorKind::NotFound)
                    .with_op("resolve_value")
                    .with_path(path)
                    .with_source_label(source_label)
                    .with_message(message)
            }
            ValkitError::InvalidType { names } => ExError::new(ExErrorKind::InvalidType)
                .with_op("is_type")
                .with_message(format!("Invalid type [{}]", names.join(","))),
            ValkitError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to ValkitError
impl From<serde_json::Error> for ValkitError {
    fn from(err: serde_json::Error) -> Self {
        ValkitError::Serialization {
            message: err.to_string(),
        }
    }
}
