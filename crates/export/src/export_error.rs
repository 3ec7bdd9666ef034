// ---------------------------------------------------------------------------
// ExportError: error types for writing projection tables to disk
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while formatting or writing an export.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error (directory not creatable, permission denied, disk full, etc.)
    Io(std::io::Error),
    /// JSON serialization failed.
    Serialize(serde_json::Error),
    /// The table had no rows; nothing was written.
    EmptyTable(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "I/O error: {e}"),
            ExportError::Serialize(e) => write!(f, "Serialization error: {e}"),
            ExportError::EmptyTable(stem) => write!(f, "Table '{stem}' has no rows to export"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            ExportError::Serialize(e) => Some(e),
            ExportError::EmptyTable(_) => None,
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Serialize(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_io() {
        let err = ExportError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only filesystem",
        ));
        let msg = format!("{err}");
        assert!(msg.contains("I/O error"), "got: {msg}");
        assert!(msg.contains("read-only"), "got: {msg}");
    }

    #[test]
    fn test_display_empty_table() {
        let msg = format!("{}", ExportError::EmptyTable("debt_status_quo".into()));
        assert!(msg.contains("debt_status_quo"), "got: {msg}");
    }

    #[test]
    fn test_from_io_keeps_source() {
        let err: ExportError = std::io::Error::new(std::io::ErrorKind::Other, "x").into();
        assert!(matches!(err, ExportError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ExportError = json_err.into();
        assert!(matches!(err, ExportError::Serialize(_)));
        let source = std::error::Error::source(&err).expect("serde_json error kept as source");
        assert!(source.downcast_ref::<serde_json::Error>().is_some());
        assert!(format!("{err}").starts_with("Serialization error"));
    }

    #[test]
    fn test_empty_table_has_no_source() {
        let err = ExportError::EmptyTable("x".into());
        assert!(std::error::Error::source(&err).is_none());
    }
}
