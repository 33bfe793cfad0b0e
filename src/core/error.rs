use thiserror::Error;

/// Errors that can occur while ranking, formatting, or storing a SIAP export.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SiapError {
    /// The request was rejected before any data was queried.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No partner qualified for the report.
    #[error("no data to export: {0}")]
    NoData(String),

    /// The ledger or partner directory could not be read.
    #[error("data source error: {0}")]
    DataSource(String),

    /// A record could not be rendered in the requested layout.
    #[error("formatting error: {0}")]
    Format(String),

    /// The finished file could not be handed to storage.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// An unexpected failure during export, wrapping its cause.
    #[error("error during export: {source}")]
    ExportFailed {
        #[source]
        source: Box<SiapError>,
    },
}

/// Coarse classification of a [`SiapError`] for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input; the user should correct the request.
    Validation,
    /// Nothing to export; shown as a notice.
    NoData,
    /// Anything else; shown as an export failure.
    Failure,
}

impl SiapError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NoData(_) => ErrorKind::NoData,
            _ => ErrorKind::Failure,
        }
    }

    /// Wrap an unexpected failure, leaving user-facing conditions untouched.
    pub(crate) fn into_export_failure(self) -> Self {
        match self {
            Self::Validation(_) | Self::NoData(_) | Self::ExportFailed { .. } => self,
            other => Self::ExportFailed {
                source: Box::new(other),
            },
        }
    }
}

/// A single request validation error with field name and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the offending request field (e.g. "cutoff_date").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    /// Create a validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
