//! Glyph resolution: hex code to icon-font character
//!
//! The table is built once from the generated codepoint export and is
//! read-only afterwards. A missing code is an error for that one record;
//! callers are expected to drop the record and keep going.

use std::collections::HashMap;

use crate::catalog::codepoints::CODEPOINTS;
use crate::error::{Error, Result};

/// Read-only map from 4-digit lowercase hex code to glyph character
#[derive(Debug, Clone)]
pub struct GlyphTable {
    map: HashMap<&'static str, char>,
}

impl GlyphTable {
    /// Build the table from the compiled-in codepoint export
    pub fn bundled() -> Self {
        GlyphTable {
            map: CODEPOINTS.iter().copied().collect(),
        }
    }

    /// Number of glyphs in the table
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Look up the glyph for a hex code
    pub fn get(&self, code: &str) -> Option<char> {
        self.map.get(code).copied()
    }

    /// Look up the glyph for a hex code, erroring on a miss
    pub fn resolve(&self, code: &str) -> Result<char> {
        self.get(code).ok_or_else(|| Error::UnknownGlyph {
            code: code.to_string(),
        })
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        GlyphTable::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_table_resolves_known_codes() {
        let table = GlyphTable::bundled();
        assert!(table.len() > 2000);
        assert_eq!(table.get("e800"), Some('\u{e800}'));
        assert_eq!(table.resolve("e000").unwrap(), '\u{e000}');
    }

    #[test]
    fn test_miss_is_an_error() {
        let table = GlyphTable::bundled();
        assert!(table.get("zzzz").is_none());
        assert!(matches!(
            table.resolve("zzzz"),
            Err(Error::UnknownGlyph { .. })
        ));
        // Valid hex, but outside the font's exported block.
        assert!(table.resolve("f8ff").is_err());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // The export is lowercase; uppercase codes do not resolve.
        let table = GlyphTable::bundled();
        assert!(table.get("E800").is_none());
    }
}
