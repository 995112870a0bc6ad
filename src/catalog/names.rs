//! Category membership for catalog records
//!
//! Classification is exact-match against three fixed name lists exported
//! with the icon font. A name can appear in more than one list; the first
//! match in application → office → transport order wins.

use std::collections::HashSet;

/// Icon names that belong to the application segment
pub const APPLICATION_NAMES: &[&str] = &[
    "Timer",
    "Alarm-Clock-WF",
    "Battery-Full-WF",
    "Battery-Low-WF",
    "Bluetooth-WF",
    "Brightness-WF",
    "Calculator-WF",
    "Calendar-WF",
    "Camera-WF",
    "Chat-WF",
    "Clock-WF",
    "Cloud-Download-WF",
    "Cloud-Upload-WF",
    "Compass-WF",
    "Contacts-WF",
    "Download-WF",
    "Flashlight-WF",
    "Globe-WF",
    "Headphones-WF",
    "Home-WF",
    "Inbox-WF",
    "Keyboard-WF",
    "Lock-WF",
    "Mail-WF",
    "Map-Marker-WF",
    "Microphone-WF",
    "Music-Note-WF",
    "Phone-WF",
    "Photo-WF",
    "Power-WF",
    "Search-WF",
    "Settings-WF",
    "Shield-WF",
    "Star-WF",
    "Trash-WF",
    "Unlock-WF",
    "Video-WF",
    "Volume-High-WF",
    "Wifi-WF",
    "Zoom-In-WF",
];

/// Icon names that belong to the office segment
pub const OFFICE_NAMES: &[&str] = &[
    "Mug-02-WF",
    "Archive-WF",
    "Briefcase-WF",
    "Calculator-Desk-WF",
    "Chair-WF",
    "Chart-Bar-WF",
    "Chart-Pie-WF",
    "Clipboard-WF",
    "Copier-WF",
    "Desk-Lamp-WF",
    "Document-WF",
    "Envelope-WF",
    "Eraser-WF",
    "Fax-WF",
    "Folder-Open-WF",
    "Folder-WF",
    "Highlighter-WF",
    "Hole-Punch-WF",
    "Id-Badge-WF",
    "Ink-Pen-WF",
    "Marker-WF",
    "Notebook-WF",
    "Paper-Clip-WF",
    "Pencil-WF",
    "Pin-Board-WF",
    "Printer-WF",
    "Projector-WF",
    "Ruler-WF",
    "Rubber-Stamp-WF",
    "Scissors-WF",
    "Shredder-WF",
    "Stapler-WF",
    "Sticky-Note-WF",
    "Tape-Dispenser-WF",
    "Whiteboard-WF",
];

/// Icon names that belong to the transport segment
pub const TRANSPORT_NAMES: &[&str] = &[
    "Garbage-Full-WF",
    "Ambulance-WF",
    "Anchor-WF",
    "Bicycle-WF",
    "Boat-WF",
    "Bus-Stop-WF",
    "Bus-WF",
    "Cable-Car-WF",
    "Car-WF",
    "Caravan-WF",
    "Cargo-Ship-WF",
    "Crosswalk-WF",
    "Ferry-WF",
    "Fire-Truck-WF",
    "Forklift-WF",
    "Fuel-Pump-WF",
    "Helicopter-WF",
    "Hot-Air-Balloon-WF",
    "Motorbike-WF",
    "Parking-WF",
    "Plane-Landing-WF",
    "Plane-Takeoff-WF",
    "Plane-WF",
    "Rocket-WF",
    "Sailboat-WF",
    "Scooter-WF",
    "Taxi-WF",
    "Tractor-WF",
    "Traffic-Light-WF",
    "Train-WF",
    "Tram-WF",
    "Truck-WF",
    "Tow-Truck-WF",
];

/// Named output categories for classified records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Application,
    Office,
    Transport,
}

/// Exact-match membership index over the three category name lists
#[derive(Debug, Clone)]
pub struct CategoryIndex {
    application: HashSet<&'static str>,
    office: HashSet<&'static str>,
    transport: HashSet<&'static str>,
}

impl CategoryIndex {
    /// Build an index from explicit name lists
    pub fn new(
        application: &[&'static str],
        office: &[&'static str],
        transport: &[&'static str],
    ) -> Self {
        CategoryIndex {
            application: application.iter().copied().collect(),
            office: office.iter().copied().collect(),
            transport: transport.iter().copied().collect(),
        }
    }

    /// Build the index over the name lists shipped with the icon font
    pub fn bundled() -> Self {
        CategoryIndex::new(APPLICATION_NAMES, OFFICE_NAMES, TRANSPORT_NAMES)
    }

    /// Classify a record name, first match wins
    pub fn classify(&self, name: &str) -> Option<Category> {
        if self.application.contains(name) {
            Some(Category::Application)
        } else if self.office.contains(name) {
            Some(Category::Office)
        } else if self.transport.contains(name) {
            Some(Category::Transport)
        } else {
            None
        }
    }
}

impl Default for CategoryIndex {
    fn default() -> Self {
        CategoryIndex::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_classification() {
        let index = CategoryIndex::bundled();
        assert_eq!(index.classify("Timer"), Some(Category::Application));
        assert_eq!(index.classify("Mug-02-WF"), Some(Category::Office));
        assert_eq!(index.classify("Garbage-Full-WF"), Some(Category::Transport));
        assert_eq!(index.classify("Not-An-Icon"), None);
    }

    #[test]
    fn test_match_is_exact() {
        let index = CategoryIndex::bundled();
        assert_eq!(index.classify("timer"), None);
        assert_eq!(index.classify("Timer "), None);
    }

    #[test]
    fn test_precedence_first_match_wins() {
        // A name listed in every set classifies as application.
        let index = CategoryIndex::new(&["Shared"], &["Shared", "Desk"], &["Shared"]);
        assert_eq!(index.classify("Shared"), Some(Category::Application));
        assert_eq!(index.classify("Desk"), Some(Category::Office));
    }
}
