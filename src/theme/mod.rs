//! Gallery theming: display colors and the fixed tile palettes

mod color;

pub use color::Color;

use crate::platform::Platform;

/// Tile accent palette used on desktop targets.
///
/// Order matters: the color cycle hands these out by global insertion order,
/// so reordering entries changes every built gallery.
pub const DESKTOP_TILE_COLORS: [Color; 15] = [
    Color::rgb(0x1b, 0xa1, 0xe2), // cyan
    Color::rgb(0xa0, 0x50, 0x00), // brown
    Color::rgb(0x33, 0x99, 0x33), // green
    Color::rgb(0xa2, 0xc1, 0x39), // lime
    Color::rgb(0xd8, 0x00, 0x73), // magenta
    Color::rgb(0xf0, 0x96, 0x09), // orange
    Color::rgb(0xe6, 0x71, 0xb8), // pink
    Color::rgb(0xa2, 0x00, 0xff), // purple
    Color::rgb(0xe5, 0x14, 0x00), // red
    Color::rgb(0x00, 0xab, 0xa9), // teal
    Color::rgb(0x8c, 0xbf, 0x26), // chartreuse
    Color::rgb(0xff, 0x00, 0x97), // raspberry
    Color::rgb(0x00, 0x50, 0xef), // cobalt
    Color::rgb(0x6a, 0x00, 0xff), // indigo
    Color::rgb(0xaa, 0x00, 0xff), // violet
];

/// Tile accent palette used on mobile targets: the desktop ramp plus one
/// extra accent.
pub const MOBILE_TILE_COLORS: [Color; 16] = [
    Color::rgb(0x1b, 0xa1, 0xe2),
    Color::rgb(0xa0, 0x50, 0x00),
    Color::rgb(0x33, 0x99, 0x33),
    Color::rgb(0xa2, 0xc1, 0x39),
    Color::rgb(0xd8, 0x00, 0x73),
    Color::rgb(0xf0, 0x96, 0x09),
    Color::rgb(0xe6, 0x71, 0xb8),
    Color::rgb(0xa2, 0x00, 0xff),
    Color::rgb(0xe5, 0x14, 0x00),
    Color::rgb(0x00, 0xab, 0xa9),
    Color::rgb(0x8c, 0xbf, 0x26),
    Color::rgb(0xff, 0x00, 0x97),
    Color::rgb(0x00, 0x50, 0xef),
    Color::rgb(0x6a, 0x00, 0xff),
    Color::rgb(0xaa, 0x00, 0xff),
    Color::rgb(0x82, 0x5a, 0x2c), // mocha
];

/// Theme for gallery surfaces and labels
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,

    pub tile_label_fg: Color,
    pub tag_fg: Color,

    pub segment_active_fg: Color,
    pub segment_inactive_fg: Color,

    tile_colors: &'static [Color],
}

impl Theme {
    /// Create the default theme for a platform
    pub fn for_platform(platform: Platform) -> Self {
        Theme {
            background: Color::rgb(16, 16, 20),
            surface: Color::rgb(28, 28, 34),
            tile_label_fg: Color::white(),
            tag_fg: Color::rgb(148, 148, 156),
            segment_active_fg: Color::white(),
            segment_inactive_fg: Color::rgb(120, 120, 128),
            tile_colors: platform.tile_colors(),
        }
    }

    /// Tile accent palette backing this theme
    pub fn tile_colors(&self) -> &'static [Color] {
        self.tile_colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_are_distinct_ramps() {
        for (i, a) in DESKTOP_TILE_COLORS.iter().enumerate() {
            for b in DESKTOP_TILE_COLORS.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        // The mobile ramp extends the desktop ramp.
        assert_eq!(&MOBILE_TILE_COLORS[..15], &DESKTOP_TILE_COLORS[..]);
    }

    #[test]
    fn test_theme_palette_follows_platform() {
        let desktop = Theme::for_platform(Platform::Desktop);
        let mobile = Theme::for_platform(Platform::Mobile);
        assert_eq!(desktop.tile_colors().len(), 15);
        assert_eq!(mobile.tile_colors().len(), 16);
    }
}
