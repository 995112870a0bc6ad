//! Gallery view-model
//!
//! Built once when the consuming view initializes and immutable afterwards:
//! loads the bundled icon catalog, builds the four display collections for
//! the platform, and resolves segmented-control titles through the locale.
//! Loading is best-effort: a missing resource yields an empty gallery, not
//! an error. [`Gallery::load`] is the strict seam for callers that want the
//! failure surfaced.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;
use tracing::warn;

use crate::carousel::CarouselState;
use crate::catalog::{Catalog, CatalogBuilder, Category, IconTile};
use crate::i18n::Locale;
use crate::platform::Platform;

/// The bundled icon catalog, one `name*hex*tag` record per line
const BUNDLED_CATALOG: &str = include_str!("../assets/gallery-icons.txt");

/// Segments of the gallery's segmented control, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    All,
    Application,
    Office,
    Transport,
}

impl Segment {
    /// Every segment in display order
    pub const ALL: [Segment; 4] = [
        Segment::All,
        Segment::Application,
        Segment::Office,
        Segment::Transport,
    ];

    /// Localization key for this segment's title
    pub fn title_key(self) -> &'static str {
        match self {
            Segment::All => "segment.all",
            Segment::Application => "segment.application",
            Segment::Office => "segment.office",
            Segment::Transport => "segment.transport",
        }
    }

    /// The catalog bucket backing this segment, None for the combined strip
    fn category(self) -> Option<Category> {
        match self {
            Segment::All => None,
            Segment::Application => Some(Category::Application),
            Segment::Office => Some(Category::Office),
            Segment::Transport => Some(Category::Transport),
        }
    }
}

/// Carousel gallery view-model over one built catalog
#[derive(Debug, Clone)]
pub struct Gallery {
    platform: Platform,
    locale: Locale,
    catalog: Catalog,
}

impl Gallery {
    /// Build the gallery from the catalog compiled into the crate
    pub fn bundled(platform: Platform) -> Self {
        Gallery {
            platform,
            locale: Locale::from_env(),
            catalog: Catalog::build(platform, BUNDLED_CATALOG.lines()),
        }
    }

    /// Build the gallery by draining a line-oriented reader.
    ///
    /// The reader is fully consumed unless the mobile saturation point
    /// stops the pass early; a read failure mid-stream stops the pass and
    /// keeps whatever was already built.
    pub fn from_reader<R: BufRead>(platform: Platform, reader: R) -> Self {
        let mut builder = CatalogBuilder::new(platform);
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if !builder.push(&line) {
                        break;
                    }
                }
                Err(err) => {
                    warn!("stopping catalog read early: {err}");
                    break;
                }
            }
        }
        Gallery {
            platform,
            locale: Locale::from_env(),
            catalog: builder.finish(),
        }
    }

    /// Build the gallery from a catalog file, best-effort.
    ///
    /// If the file cannot be opened the gallery comes back empty; nothing
    /// propagates to the caller.
    pub fn from_path(platform: Platform, path: impl AsRef<Path>) -> Self {
        match File::open(path.as_ref()) {
            Ok(file) => Gallery::from_reader(platform, BufReader::new(file)),
            Err(err) => {
                warn!("icon catalog {:?} unavailable: {err}", path.as_ref());
                Gallery {
                    platform,
                    locale: Locale::from_env(),
                    catalog: Catalog::empty(),
                }
            }
        }
    }

    /// Build the gallery from a catalog file, surfacing the open failure
    pub fn load(platform: Platform, path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("opening icon catalog {:?}", path.as_ref()))?;
        Ok(Gallery::from_reader(platform, BufReader::new(file)))
    }

    /// Replace the locale used for titles
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The built catalog collections
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Tiles backing one segment
    pub fn tiles(&self, segment: Segment) -> &[IconTile] {
        match segment.category() {
            None => &self.catalog.all,
            Some(category) => self.catalog.bucket(category),
        }
    }

    /// Localized title for one segment
    pub fn segment_title(&self, segment: Segment) -> &str {
        self.locale.text(segment.title_key())
    }

    /// Localized gallery title
    pub fn title(&self) -> &str {
        self.locale.text("gallery.title")
    }

    /// Fresh carousel state sized to this gallery's segments
    pub fn carousel(&self) -> CarouselState {
        CarouselState::new(
            Segment::ALL
                .iter()
                .map(|segment| self.tiles(*segment).len())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BUCKET_CAP;
    use std::io::Write;

    #[test]
    fn test_bundled_gallery_obeys_caps() {
        for platform in [Platform::Desktop, Platform::Mobile] {
            let gallery = Gallery::bundled(platform);
            assert!(!gallery.catalog().is_empty());
            assert!(gallery.tiles(Segment::Office).len() <= BUCKET_CAP);
            assert!(gallery.tiles(Segment::Transport).len() <= BUCKET_CAP);
        }
    }

    #[test]
    fn test_desktop_bundled_strip_is_replicated() {
        let gallery = Gallery::bundled(Platform::Desktop);
        assert_eq!(gallery.tiles(Segment::All).len() % 5, 0);
    }

    #[test]
    fn test_missing_resource_yields_empty_gallery() {
        let gallery = Gallery::from_path(Platform::Desktop, "/no/such/catalog.txt");
        assert!(gallery.catalog().is_empty());
        for segment in Segment::ALL {
            assert!(gallery.tiles(segment).is_empty());
        }
    }

    #[test]
    fn test_strict_load_surfaces_the_open_failure() {
        assert!(Gallery::load(Platform::Desktop, "/no/such/catalog.txt").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Mug-02-WF*e800*office").unwrap();
        writeln!(file, "Timer*e801*application").unwrap();
        file.flush().unwrap();

        let gallery = Gallery::load(Platform::Mobile, file.path()).unwrap();
        assert_eq!(gallery.tiles(Segment::Office).len(), 1);
        assert_eq!(gallery.tiles(Segment::Application).len(), 1);
        assert_eq!(gallery.tiles(Segment::All).len(), 2);
    }

    #[test]
    fn test_segment_titles_follow_locale() {
        let gallery =
            Gallery::bundled(Platform::Desktop).with_locale(Locale::from_string("de-DE"));
        assert_eq!(gallery.segment_title(Segment::Office), "Büro");
        assert_eq!(gallery.title(), "Symbolgalerie");

        let gallery = gallery.with_locale(Locale::from_string("xx"));
        assert_eq!(gallery.segment_title(Segment::Office), "Office");
    }

    #[test]
    fn test_carousel_matches_segment_sizes() {
        let gallery = Gallery::bundled(Platform::Mobile);
        let mut carousel = gallery.carousel();
        assert_eq!(carousel.segment_count(), Segment::ALL.len());
        assert_eq!(carousel.len(), gallery.tiles(Segment::All).len());

        carousel.activate(2);
        assert_eq!(carousel.len(), gallery.tiles(Segment::Office).len());
    }
}
