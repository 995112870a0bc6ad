//! Catalog error types
//!
//! Every variant here is recovered close to where it occurs: malformed
//! records and unknown glyph codes are dropped per-record during the catalog
//! pass, and IO errors only surface through the strict loading API.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building an icon catalog
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog record ({found} fields, expected 3): {line:?}")]
    MalformedRecord { line: String, found: usize },

    #[error("no glyph mapped for code {code:?}")]
    UnknownGlyph { code: String },
}

impl Error {
    /// True for errors the catalog pass recovers from by dropping one record.
    pub fn is_per_record(&self) -> bool {
        matches!(
            self,
            Error::MalformedRecord { .. } | Error::UnknownGlyph { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::MalformedRecord {
            line: "a*b".to_string(),
            found: 2,
        };
        assert!(err.to_string().contains("2 fields"));

        let err = Error::UnknownGlyph {
            code: "zzzz".to_string(),
        };
        assert!(err.to_string().contains("zzzz"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_per_record());
    }

    #[test]
    fn test_per_record_classification() {
        assert!(Error::UnknownGlyph {
            code: "e900".to_string()
        }
        .is_per_record());
        assert!(Error::MalformedRecord {
            line: String::new(),
            found: 1
        }
        .is_per_record());
    }
}
