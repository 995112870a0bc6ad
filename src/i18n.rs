//! Internationalization: locale detection and gallery UI strings
//!
//! The string accessor backs the gallery's segmented control: every segment
//! title is resolved through [`Locale::text`] so switching the UI language is
//! a locale change, not a per-widget edit.

/// Text reading direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    /// Detect text direction from language code
    pub fn from_lang(lang: &str) -> Self {
        // RTL languages
        if lang.starts_with("ar") ||  // Arabic
           lang.starts_with("he") ||  // Hebrew
           lang.starts_with("fa") ||  // Persian/Farsi
           lang.starts_with("ur")
        // Urdu
        {
            TextDirection::RightToLeft
        } else {
            TextDirection::LeftToRight
        }
    }

    /// Check if this is RTL
    pub fn is_rtl(&self) -> bool {
        matches!(self, TextDirection::RightToLeft)
    }
}

/// Locale information for UI string resolution
#[derive(Debug, Clone)]
pub struct Locale {
    /// Language code (ISO 639-1): "en", "de", "ar", "ja", etc.
    pub language: String,

    /// Optional region code (ISO 3166-1): "US", "GB", "SA", etc.
    pub region: Option<String>,

    /// Text direction for this locale
    pub text_direction: TextDirection,
}

impl Locale {
    /// Create a new locale from language and optional region
    pub fn new(language: impl Into<String>, region: Option<String>) -> Self {
        let language = language.into();
        let text_direction = TextDirection::from_lang(&language);
        Locale {
            language,
            region,
            text_direction,
        }
    }

    /// Parse locale from string like "en-US", "ar-SA", "he-IL"
    pub fn from_string(locale_str: &str) -> Self {
        if locale_str.is_empty() {
            return Self::default();
        }

        let parts: Vec<&str> = locale_str.split('-').collect();
        let language = parts
            .first()
            .filter(|s| !s.is_empty())
            .unwrap_or(&"en")
            .to_string();
        let region = parts.get(1).map(|s| s.to_uppercase());

        Self::new(language, region)
    }

    /// Detect locale from environment
    pub fn from_env() -> Self {
        if let Ok(lang) = std::env::var("LANG") {
            // LANG is typically like "en_US.UTF-8" or "ar_SA.UTF-8"
            let locale_part = lang.split('.').next().unwrap_or("en_US");
            let normalized = locale_part.replace('_', "-");
            Self::from_string(&normalized)
        } else {
            Self::default()
        }
    }

    /// Resolve a UI string key for this locale.
    ///
    /// Unknown languages fall back to English; unknown keys resolve to the
    /// key itself so missing translations stay visible instead of panicking.
    pub fn text<'a>(&self, key: &'a str) -> &'a str {
        lookup(&self.language, key)
            .or_else(|| lookup("en", key))
            .unwrap_or(key)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en", Some("US".to_string()))
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref region) = self.region {
            write!(f, "{}-{}", self.language, region)
        } else {
            write!(f, "{}", self.language)
        }
    }
}

/// Keys every shipped language must resolve
pub const UI_KEYS: &[&str] = &[
    "gallery.title",
    "segment.all",
    "segment.application",
    "segment.office",
    "segment.transport",
];

fn lookup(lang: &str, key: &str) -> Option<&'static str> {
    let table: &[(&str, &str)] = match lang {
        "en" => &[
            ("gallery.title", "Icon Gallery"),
            ("segment.all", "All"),
            ("segment.application", "Application"),
            ("segment.office", "Office"),
            ("segment.transport", "Transport"),
        ],
        "de" => &[
            ("gallery.title", "Symbolgalerie"),
            ("segment.all", "Alle"),
            ("segment.application", "Anwendung"),
            ("segment.office", "Büro"),
            ("segment.transport", "Verkehr"),
        ],
        "fr" => &[
            ("gallery.title", "Galerie d'icônes"),
            ("segment.all", "Tout"),
            ("segment.application", "Application"),
            ("segment.office", "Bureau"),
            ("segment.transport", "Transport"),
        ],
        "es" => &[
            ("gallery.title", "Galería de iconos"),
            ("segment.all", "Todo"),
            ("segment.application", "Aplicación"),
            ("segment.office", "Oficina"),
            ("segment.transport", "Transporte"),
        ],
        "ja" => &[
            ("gallery.title", "アイコンギャラリー"),
            ("segment.all", "すべて"),
            ("segment.application", "アプリ"),
            ("segment.office", "オフィス"),
            ("segment.transport", "交通"),
        ],
        "ar" => &[
            ("gallery.title", "معرض الأيقونات"),
            ("segment.all", "الكل"),
            ("segment.application", "تطبيق"),
            ("segment.office", "مكتب"),
            ("segment.transport", "نقل"),
        ],
        _ => return None,
    };

    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_direction_detection() {
        assert_eq!(TextDirection::from_lang("en"), TextDirection::LeftToRight);
        assert_eq!(TextDirection::from_lang("ar"), TextDirection::RightToLeft);
        assert_eq!(TextDirection::from_lang("he"), TextDirection::RightToLeft);
        assert_eq!(TextDirection::from_lang("ja"), TextDirection::LeftToRight);
    }

    #[test]
    fn test_locale_parsing() {
        let locale = Locale::from_string("en-US");
        assert_eq!(locale.language, "en");
        assert_eq!(locale.region, Some("US".to_string()));
        assert_eq!(locale.text_direction, TextDirection::LeftToRight);

        let locale_ar = Locale::from_string("ar-SA");
        assert_eq!(locale_ar.text_direction, TextDirection::RightToLeft);
    }

    #[test]
    fn test_locale_from_invalid_string() {
        let locale = Locale::from_string("");
        assert_eq!(locale.language, "en");

        let locale2 = Locale::from_string("xyz");
        assert_eq!(locale2.language, "xyz");
        assert_eq!(locale2.region, None);
    }

    #[test]
    fn test_every_language_resolves_every_key() {
        for lang in ["en", "de", "fr", "es", "ja", "ar"] {
            let locale = Locale::new(lang, None);
            for key in UI_KEYS {
                assert_ne!(locale.text(key), *key, "{lang} missing {key}");
            }
        }
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let locale = Locale::from_string("xx-YY");
        assert_eq!(locale.text("segment.all"), "All");
    }

    #[test]
    fn test_unknown_key_stays_visible() {
        let locale = Locale::default();
        assert_eq!(locale.text("segment.bogus"), "segment.bogus");
    }
}
