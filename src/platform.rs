//! Execution-context flag for capacity and palette decisions
//!
//! Mobile targets get stricter collection caps and an early-saturation stop;
//! desktop targets get the larger working set and the replication pass that
//! feeds looping carousels. The flag is an explicit runtime parameter so the
//! same build logic is testable on any host.

use crate::theme::{Color, DESKTOP_TILE_COLORS, MOBILE_TILE_COLORS};

/// Execution context the gallery is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// Constrained touch targets (phones, tablets)
    Mobile,
    /// Unconstrained targets (desktop, laptop)
    #[default]
    Desktop,
}

impl Platform {
    /// Default platform for the compile target.
    ///
    /// Only a convenience for demos and top-level wiring; library APIs take
    /// the flag as a parameter.
    pub fn detect() -> Self {
        if cfg!(any(target_os = "android", target_os = "ios")) {
            Platform::Mobile
        } else {
            Platform::Desktop
        }
    }

    /// Check if this is a constrained touch context
    pub fn is_mobile(self) -> bool {
        matches!(self, Platform::Mobile)
    }

    /// Tile palette for this platform (15 colors on desktop, 16 on mobile)
    pub fn tile_colors(self) -> &'static [Color] {
        match self {
            Platform::Mobile => &MOBILE_TILE_COLORS,
            Platform::Desktop => &DESKTOP_TILE_COLORS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_sizes() {
        assert_eq!(Platform::Desktop.tile_colors().len(), 15);
        assert_eq!(Platform::Mobile.tile_colors().len(), 16);
    }

    #[test]
    fn test_mobile_flag() {
        assert!(Platform::Mobile.is_mobile());
        assert!(!Platform::Desktop.is_mobile());
        assert_eq!(Platform::default(), Platform::Desktop);
    }
}
