//! Display record for one gallery tile

use crate::theme::Color;

/// One fully resolved gallery tile: name, accent color, glyph, tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTile {
    pub name: String,
    pub color: Color,
    pub glyph: char,
    pub tag: String,
}

impl IconTile {
    /// Label color that stays readable on this tile's accent color
    pub fn label_color(&self) -> Color {
        self.color.label_color()
    }
}

impl std::fmt::Display for IconTile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.glyph, self.name, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let tile = IconTile {
            name: "Timer".to_string(),
            color: Color::rgb(0x1b, 0xa1, 0xe2),
            glyph: '\u{e801}',
            tag: "application".to_string(),
        };
        assert_eq!(tile.to_string(), "\u{e801} Timer (application)");
    }
}
