//! Raw catalog record parsing
//!
//! The bundled catalog is newline-delimited text; each record is three
//! `*`-separated fields: icon name, 4-digit hex glyph code, tag.

use crate::error::{Error, Result};

/// Field separator inside one catalog line
pub const FIELD_SEPARATOR: char = '*';

/// One parsed catalog record, not yet resolved against the glyph table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: String,
    pub code: String,
    pub tag: String,
}

impl RawEntry {
    /// Parse one catalog line into exactly three fields.
    ///
    /// Any other field count is a [`Error::MalformedRecord`]; the catalog
    /// pass drops such lines without surfacing them.
    pub fn parse(line: &str) -> Result<Self> {
        let mut fields = line.split(FIELD_SEPARATOR);
        match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(name), Some(code), Some(tag), None) => Ok(RawEntry {
                name: name.to_string(),
                code: code.to_string(),
                tag: tag.to_string(),
            }),
            _ => Err(Error::MalformedRecord {
                line: line.to_string(),
                found: line.split(FIELD_SEPARATOR).count(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_line() {
        let entry = RawEntry::parse("Mug-02-WF*e800*office").unwrap();
        assert_eq!(entry.name, "Mug-02-WF");
        assert_eq!(entry.code, "e800");
        assert_eq!(entry.tag, "office");
    }

    #[test]
    fn test_parse_preserves_empty_fields() {
        // Exactly three fields is well-formed even when some are empty.
        let entry = RawEntry::parse("**").unwrap();
        assert_eq!(entry.name, "");
        assert_eq!(entry.code, "");
        assert_eq!(entry.tag, "");
    }

    #[test]
    fn test_parse_rejects_wrong_field_counts() {
        for (line, found) in [
            ("", 1),
            ("Timer", 1),
            ("Timer*e801", 2),
            ("Timer*e801*application*extra", 4),
        ] {
            match RawEntry::parse(line) {
                Err(Error::MalformedRecord { found: n, .. }) => assert_eq!(n, found),
                other => panic!("expected malformed record for {line:?}, got {other:?}"),
            }
        }
    }
}
