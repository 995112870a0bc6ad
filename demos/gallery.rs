//! glyphdeck demo - prints the bundled gallery as an ANSI-colored strip

use anyhow::Result;
use glyphdeck::{Gallery, Platform, Segment, Theme};

fn main() -> Result<()> {
    let platform = Platform::detect();
    let gallery = Gallery::bundled(platform);
    let theme = Theme::for_platform(platform);
    let mut carousel = gallery.carousel();

    println!("{} ({:?})", gallery.title(), platform);
    println!();

    for (index, segment) in Segment::ALL.iter().enumerate() {
        carousel.activate(index);
        let tiles = gallery.tiles(*segment);

        println!(
            "{}{}\x1b[0m - {} tiles",
            theme.segment_active_fg.ansi_fg(),
            gallery.segment_title(*segment),
            tiles.len(),
        );

        // First strip viewport of each segment, tile glyphs on their
        // accent colors.
        for tile in &tiles[carousel.visible_range(8)] {
            print!(
                "{}{} {} \x1b[0m ",
                tile.color.ansi_bg(),
                tile.label_color().ansi_fg(),
                tile.glyph,
            );
        }
        println!();

        for tile in &tiles[carousel.visible_range(8)] {
            print!(
                "{}{:<12.12}\x1b[0m ",
                theme.tag_fg.ansi_fg(),
                tile.name.trim_end_matches("-WF"),
            );
        }
        println!();
        println!();
    }

    Ok(())
}
