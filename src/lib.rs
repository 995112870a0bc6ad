//! glyphdeck - icon-font catalogs and gallery view-models for custom-drawn UIs
//!
//! A small toolkit layer for carousel-style icon galleries:
//! - Single-pass catalog builder: parse, classify, colorize, cap
//! - Fixed glyph table and category name lists shipped with the icon font
//! - Deterministic tile color cycling with per-platform palettes
//! - Locale-aware segmented-control titles
//! - Pure-data carousel state, presentation left to the host toolkit

pub mod carousel;
pub mod catalog;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod platform;
pub mod theme;

// Re-export commonly used types
pub use carousel::CarouselState;
pub use catalog::{
    Catalog, CatalogBuilder, Category, CategoryIndex, ColorCycle, GlyphTable, IconTile, RawEntry,
    BUCKET_CAP, MOBILE_ALL_CAP, REPLICATION_PASSES,
};
pub use error::{Error, Result};
pub use gallery::{Gallery, Segment};
pub use i18n::{Locale, TextDirection};
pub use platform::Platform;
pub use theme::{Color, Theme, DESKTOP_TILE_COLORS, MOBILE_TILE_COLORS};
