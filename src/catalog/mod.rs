//! Icon catalog construction
//!
//! Transforms the flat, `*`-delimited icon catalog shipped with the gallery
//! font into four colorized display collections: one per category segment
//! plus the combined strip the carousel binds to. The pass is single
//! threaded and run-to-completion; record-level failures (malformed lines,
//! unresolvable glyph codes) are dropped where they occur and never surface
//! to the caller.

pub mod cycle;
pub mod entry;
pub mod glyphs;
pub mod names;
pub mod tile;

mod codepoints;

pub use cycle::ColorCycle;
pub use entry::RawEntry;
pub use glyphs::GlyphTable;
pub use names::{Category, CategoryIndex};
pub use tile::IconTile;

use tracing::{debug, trace};

use crate::error::Result;
use crate::platform::Platform;

/// Maximum number of tiles the office and transport buckets each hold
pub const BUCKET_CAP: usize = 20;

/// On mobile, application records stop landing in `all` past this size
pub const MOBILE_ALL_CAP: usize = 650;

/// Extra copies of the staged pass appended to `all` on desktop
pub const REPLICATION_PASSES: usize = 4;

/// The four output collections of one catalog build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Every resolved record in insertion order, replicated on desktop
    pub all: Vec<IconTile>,
    /// Application-category tiles, uncapped
    pub application: Vec<IconTile>,
    /// Office-category tiles, at most [`BUCKET_CAP`]
    pub office: Vec<IconTile>,
    /// Transport-category tiles, at most [`BUCKET_CAP`]
    pub transport: Vec<IconTile>,
}

impl Catalog {
    /// Build a catalog from an ordered sequence of text lines
    pub fn build<I, S>(platform: Platform, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = CatalogBuilder::new(platform);
        builder.extend(lines);
        builder.finish()
    }

    /// The degenerate catalog: nothing populated
    pub fn empty() -> Self {
        Catalog::default()
    }

    /// Tiles of one named category bucket
    pub fn bucket(&self, category: Category) -> &[IconTile] {
        match category {
            Category::Application => &self.application,
            Category::Office => &self.office,
            Category::Transport => &self.transport,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Single-use builder for one catalog pass.
///
/// Owns the glyph table, the category index, the color cycle and the growing
/// output collections, so one build never shares state with another.
#[derive(Debug)]
pub struct CatalogBuilder {
    platform: Platform,
    glyphs: GlyphTable,
    categories: CategoryIndex,
    cycle: ColorCycle,

    all: Vec<IconTile>,
    application: Vec<IconTile>,
    office: Vec<IconTile>,
    transport: Vec<IconTile>,

    /// Staging copy of every resolved record; the desktop replication pass
    /// re-appends it to `all` so looping carousels get a longer strip.
    staged: Vec<IconTile>,
}

impl CatalogBuilder {
    /// Create a builder over the bundled glyph table and name lists
    pub fn new(platform: Platform) -> Self {
        CatalogBuilder::with_tables(platform, GlyphTable::bundled(), CategoryIndex::bundled())
    }

    /// Create a builder over explicit tables (custom fonts, tests)
    pub fn with_tables(platform: Platform, glyphs: GlyphTable, categories: CategoryIndex) -> Self {
        CatalogBuilder {
            platform,
            glyphs,
            categories,
            cycle: ColorCycle::new(platform),
            all: Vec::new(),
            application: Vec::new(),
            office: Vec::new(),
            transport: Vec::new(),
            staged: Vec::new(),
        }
    }

    /// Feed lines into the pass, in order.
    ///
    /// Stops draining the iterator once the mobile saturation point is
    /// reached.
    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            if !self.push(line.as_ref()) {
                break;
            }
        }
    }

    /// Finish the pass and hand out the four collections.
    ///
    /// Desktop builds append [`REPLICATION_PASSES`] full copies of the
    /// staged records to `all`; mobile builds skip replication.
    pub fn finish(mut self) -> Catalog {
        if !self.platform.is_mobile() {
            for _ in 0..REPLICATION_PASSES {
                self.all.extend(self.staged.iter().cloned());
            }
        }
        Catalog {
            all: self.all,
            application: self.application,
            office: self.office,
            transport: self.transport,
        }
    }

    /// Process one line. Returns false once the pass must stop entirely;
    /// from then on callers should feed no further lines.
    pub fn push(&mut self, line: &str) -> bool {
        let entry = match RawEntry::parse(line) {
            Ok(entry) => entry,
            Err(err) => {
                trace!("skipping catalog line: {err}");
                return true;
            }
        };

        // Mobile saturation: once both capped buckets are full, nothing
        // later in the catalog can change the output, so stop reading.
        if self.platform.is_mobile()
            && self.office.len() >= BUCKET_CAP
            && self.transport.len() >= BUCKET_CAP
        {
            return false;
        }

        match self.categories.classify(&entry.name) {
            Some(Category::Application) => {
                if self.platform.is_mobile() && self.all.len() > MOBILE_ALL_CAP {
                    return true;
                }
                match self.resolve(&entry) {
                    Ok(tile) => {
                        self.application.push(tile.clone());
                        self.all.push(tile.clone());
                        self.staged.push(tile);
                    }
                    Err(err) => debug!("dropping {:?}: {err}", entry.name),
                }
            }
            Some(Category::Office) => match self.resolve(&entry) {
                Ok(tile) => {
                    if self.office.len() < BUCKET_CAP {
                        self.office.push(tile.clone());
                    }
                    self.all.push(tile.clone());
                    self.staged.push(tile);
                }
                Err(err) => debug!("dropping {:?}: {err}", entry.name),
            },
            Some(Category::Transport) => match self.resolve(&entry) {
                Ok(tile) => {
                    if self.transport.len() < BUCKET_CAP {
                        self.transport.push(tile.clone());
                    }
                    self.all.push(tile.clone());
                    self.staged.push(tile);
                }
                Err(err) => debug!("dropping {:?}: {err}", entry.name),
            },
            None => {}
        }
        true
    }

    /// Resolve one record into a display tile.
    ///
    /// The glyph is resolved before a color is drawn, so a failed record
    /// never shifts the color cycle.
    fn resolve(&mut self, entry: &RawEntry) -> Result<IconTile> {
        let glyph = self.glyphs.resolve(&entry.code)?;
        let color = self.cycle.next_color();
        Ok(IconTile {
            name: entry.name.clone(),
            color,
            glyph,
            tag: entry.tag.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{DESKTOP_TILE_COLORS, MOBILE_TILE_COLORS};

    fn office_line(n: usize) -> String {
        format!("{}*e8{:02x}*office", names::OFFICE_NAMES[n], n)
    }

    fn transport_line(n: usize) -> String {
        format!("{}*e7{:02x}*transport", names::TRANSPORT_NAMES[n], n)
    }

    #[test]
    fn test_matched_records_resolve_against_the_glyph_table() {
        // Mobile skips replication, so `all` is the raw pass output.
        let catalog = Catalog::build(
            Platform::Mobile,
            ["Timer*e801*application", "Mug-02-WF*e800*office"],
        );
        assert_eq!(catalog.all.len(), 2);
        assert_eq!(catalog.all[0].glyph, '\u{e801}');
        assert_eq!(catalog.all[1].glyph, '\u{e800}');
        assert_eq!(catalog.application.len(), 1);
        assert_eq!(catalog.office.len(), 1);
    }

    #[test]
    fn test_malformed_and_unmatched_lines_produce_nothing() {
        let catalog = Catalog::build(
            Platform::Mobile,
            [
                "",
                "Timer",
                "Timer*e801",
                "Timer*e801*application*extra",
                "No-Such-Icon*e810*misc",
            ],
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_office_and_transport_buckets_are_capped() {
        let mut lines: Vec<String> = (0..35).map(office_line).collect();
        lines.extend((0..33).map(transport_line));

        let catalog = Catalog::build(Platform::Desktop, &lines);
        assert_eq!(catalog.office.len(), BUCKET_CAP);
        assert_eq!(catalog.transport.len(), BUCKET_CAP);
        // Overflow records still land in the combined strip.
        assert_eq!(catalog.all.len(), (35 + 33) * (1 + REPLICATION_PASSES));
    }

    #[test]
    fn test_mobile_stops_reading_once_both_buckets_fill() {
        let mut lines: Vec<String> = (0..25).map(office_line).collect();
        lines.extend((0..25).map(transport_line));
        lines.push("Timer*e801*application".to_string());

        let catalog = Catalog::build(Platform::Mobile, &lines);
        assert_eq!(catalog.office.len(), BUCKET_CAP);
        assert_eq!(catalog.transport.len(), BUCKET_CAP);
        // 25 office lines all processed, transport lines only until its
        // bucket filled; the trailing application line was never read.
        assert_eq!(catalog.all.len(), 25 + BUCKET_CAP);
        assert!(catalog.application.is_empty());
    }

    #[test]
    fn test_mobile_caps_application_records_at_650() {
        let mut lines = vec!["Timer*e801*application".to_string(); 700];
        lines.push(office_line(0));

        let catalog = Catalog::build(Platform::Mobile, &lines);
        // Record 651 sees len == 650 and still lands; 652 onward are skipped.
        assert_eq!(catalog.application.len(), MOBILE_ALL_CAP + 1);
        // Office records are not subject to the guard.
        assert_eq!(catalog.office.len(), 1);
        assert_eq!(catalog.all.len(), MOBILE_ALL_CAP + 2);
    }

    #[test]
    fn test_desktop_replicates_the_staged_pass_four_times() {
        let lines = ["Mug-02-WF*e800*office", "Timer*e801*application"];
        let catalog = Catalog::build(Platform::Desktop, lines);

        assert_eq!(catalog.all.len(), 2 * (1 + REPLICATION_PASSES));
        for copy in 1..=REPLICATION_PASSES {
            assert_eq!(&catalog.all[copy * 2..copy * 2 + 2], &catalog.all[0..2]);
        }
    }

    #[test]
    fn test_unresolvable_glyph_drops_only_that_record() {
        // Office and application resolve; the transport record's code is
        // not in the table and only that record is lost.
        let lines = [
            "Mug-02-WF*e800*office",
            "Timer*e801*application",
            "Garbage-Full-WF*zzzz*transport",
        ];
        let catalog = Catalog::build(Platform::Desktop, lines);

        assert_eq!(catalog.office.len(), 1);
        assert_eq!(catalog.application.len(), 1);
        assert_eq!(catalog.transport.len(), 0);
        assert_eq!(catalog.all.len(), 2 * (1 + REPLICATION_PASSES));
    }

    #[test]
    fn test_colors_follow_global_insertion_order() {
        let lines = [
            "Mug-02-WF*e800*office",
            "Timer*e801*application",
            "Bus-WF*e700*transport",
        ];
        let catalog = Catalog::build(Platform::Desktop, lines);

        assert_eq!(catalog.office[0].color, DESKTOP_TILE_COLORS[0]);
        assert_eq!(catalog.application[0].color, DESKTOP_TILE_COLORS[1]);
        assert_eq!(catalog.transport[0].color, DESKTOP_TILE_COLORS[2]);
    }

    #[test]
    fn test_dropped_record_does_not_shift_the_cycle() {
        let lines = ["Bus-WF*zzzz*transport", "Mug-02-WF*e800*office"];
        let catalog = Catalog::build(Platform::Desktop, lines);
        assert_eq!(catalog.office[0].color, DESKTOP_TILE_COLORS[0]);
    }

    #[test]
    fn test_color_cycle_repeats_at_palette_length() {
        let lines: Vec<String> = (0..40)
            .map(|n| format!("Timer*e8{:02x}*application", n % 16))
            .collect();
        let catalog = Catalog::build(Platform::Mobile, &lines);

        let cycle_len = MOBILE_TILE_COLORS.len();
        for (n, tile) in catalog.all.iter().enumerate().take(40 - cycle_len) {
            assert_eq!(tile.color, catalog.all[n + cycle_len].color);
        }
    }

    #[test]
    fn test_independent_builds_are_identical() {
        let lines: Vec<String> = (0..30).map(office_line).collect();
        let a = Catalog::build(Platform::Desktop, &lines);
        let b = Catalog::build(Platform::Desktop, &lines);
        assert_eq!(a, b);
    }

    #[test]
    fn test_bucket_accessor() {
        let catalog = Catalog::build(Platform::Mobile, ["Mug-02-WF*e800*office"]);
        assert_eq!(catalog.bucket(Category::Office).len(), 1);
        assert!(catalog.bucket(Category::Application).is_empty());
        assert!(catalog.bucket(Category::Transport).is_empty());
    }
}
