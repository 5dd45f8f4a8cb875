//! # Translation Lookup
//!
//! Static key→string catalog for the three supported languages. Lookup is
//! a pure function of `(language, key)`; no state beyond the caller's
//! current language selection.
//!
//! Fallback order: requested language → Hindi (the primary locale) → the
//! key itself. The Marathi catalog is intentionally thinner than the Hindi
//! one; anything missing falls through.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Hindi (primary locale).
    #[default]
    Hi,
    /// English.
    En,
    /// Marathi.
    Mr,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Hi => "hi",
            Language::En => "en",
            Language::Mr => "mr",
        }
    }

    /// Parse a stored language preference; unknown values fall back to
    /// Hindi rather than erroring on stale state.
    pub fn parse(value: &str) -> Language {
        match value {
            "en" => Language::En,
            "mr" => Language::Mr,
            _ => Language::Hi,
        }
    }

    /// BCP-47 tag used for speech synthesis voices.
    pub fn speech_tag(&self) -> &'static str {
        match self {
            Language::Hi => "hi-IN",
            Language::En => "en-IN",
            Language::Mr => "mr-IN",
        }
    }
}

const HI: &[(&str, &str)] = &[
    // Navigation
    ("dashboard", "डैशबोर्ड"),
    ("my-farm", "मेरा खेत"),
    ("calendar", "कैलेंडर"),
    ("market-prices", "बाजार भाव"),
    ("analyze-plant", "पौधा विश्लेषण"),
    ("ask-saathi", "साथी से पूछें"),
    ("crop-recommendations", "फसल सुझाव"),
    ("inventory", "इन्वेंटरी"),
    ("yield-prediction", "उत्पादन पूर्वानुमान"),
    ("more", "और विकल्प"),
    // Dashboard
    ("good-evening", "शुभ संध्या"),
    ("live-farm-vitals", "लाइव फार्म स्वास्थ्य"),
    ("yield-forecast", "उत्पादन पूर्वानुमान"),
    ("market-price-alert", "बाजार भाव अलर्ट"),
    ("soil-moisture", "मिट्टी में नमी"),
    ("soil-ph", "मिट्टी pH"),
    ("high-priority", "उच्च प्राथमिकता"),
    ("good-condition", "अच्छी स्थिति"),
    ("ideal-level", "आदर्श स्तर"),
    // Status
    ("high", "उच्च"),
    ("medium", "मध्यम"),
    ("low", "कम"),
    ("excellent", "उत्कृष्ट"),
    ("good", "अच्छा"),
    ("fair", "मध्यम"),
    // Common actions
    ("view-details", "विस्तार देखें"),
    ("close", "बंद करें"),
    ("save", "सेव करें"),
    ("cancel", "रद्द करें"),
    ("add", "जोड़ें"),
    ("edit", "संपादित करें"),
    ("delete", "हटाएं"),
    ("search", "खोजें"),
    ("filter", "फिल्टर"),
    ("sort-by", "इसके अनुसार क्रमबद्ध करें"),
    ("today", "आज"),
    // Profile
    ("profile", "प्रोफ़ाइल"),
    ("settings", "सेटिंग्स"),
    ("logout", "लॉग आउट"),
];

const EN: &[(&str, &str)] = &[
    // Navigation
    ("dashboard", "Dashboard"),
    ("my-farm", "My Farm"),
    ("calendar", "Calendar"),
    ("market-prices", "Market Prices"),
    ("analyze-plant", "Analyze Plant"),
    ("ask-saathi", "Ask Saathi"),
    ("crop-recommendations", "Crop Recommendations"),
    ("inventory", "Inventory"),
    ("yield-prediction", "Yield Prediction"),
    ("more", "More"),
    // Dashboard
    ("good-evening", "Good Evening"),
    ("live-farm-vitals", "Live Farm Vitals"),
    ("yield-forecast", "Yield Forecast"),
    ("market-price-alert", "Market Price Alert"),
    ("soil-moisture", "Soil Moisture"),
    ("soil-ph", "Soil pH"),
    ("high-priority", "High Priority"),
    ("good-condition", "Good Condition"),
    ("ideal-level", "Ideal Level"),
    // Status
    ("high", "High"),
    ("medium", "Medium"),
    ("low", "Low"),
    ("excellent", "Excellent"),
    ("good", "Good"),
    ("fair", "Fair"),
    // Common actions
    ("view-details", "View Details"),
    ("close", "Close"),
    ("save", "Save"),
    ("cancel", "Cancel"),
    ("add", "Add"),
    ("edit", "Edit"),
    ("delete", "Delete"),
    ("search", "Search"),
    ("filter", "Filter"),
    ("sort-by", "Sort By"),
    ("today", "Today"),
    // Profile
    ("profile", "Profile"),
    ("settings", "Settings"),
    ("logout", "Log Out"),
];

const MR: &[(&str, &str)] = &[
    // Navigation
    ("dashboard", "डॅशबोर्ड"),
    ("my-farm", "माझे शेत"),
    ("calendar", "दिनदर्शिका"),
    ("market-prices", "बाजार भाव"),
    ("analyze-plant", "वनस्पती विश्लेषण"),
    ("ask-saathi", "साथीला विचारा"),
    ("crop-recommendations", "पीक शिफारसी"),
    ("inventory", "यादी"),
    ("yield-prediction", "उत्पादन अंदाज"),
    ("more", "आणखी पर्याय"),
    // Dashboard
    ("good-evening", "शुभ संध्याकाळ"),
    ("live-farm-vitals", "लाइव्ह शेत स्वास्थ्य"),
    ("yield-forecast", "उत्पादन अंदाज"),
    ("market-price-alert", "बाजार भाव सूचना"),
    ("soil-moisture", "मातीची ओलावा"),
    ("soil-ph", "माती pH"),
    ("high-priority", "उच्च प्राथमिकता"),
    ("good-condition", "चांगली स्थिती"),
    ("ideal-level", "आदर्श पातळी"),
    // Common actions
    ("view-details", "तपशील पहा"),
    ("close", "बंद करा"),
    ("save", "जतन करा"),
    ("cancel", "रद्द करा"),
    ("add", "जोडा"),
    ("edit", "संपादित करा"),
    ("delete", "हटवा"),
    ("today", "आज"),
    // Profile
    ("settings", "सेटिंग्स"),
    ("logout", "लॉग आउट"),
];

static CATALOG: Lazy<HashMap<Language, HashMap<&'static str, &'static str>>> = Lazy::new(|| {
    [(Language::Hi, HI), (Language::En, EN), (Language::Mr, MR)]
        .into_iter()
        .map(|(lang, entries)| (lang, entries.iter().copied().collect()))
        .collect()
});

fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    CATALOG.get(&lang).and_then(|table| table.get(key)).copied()
}

/// Look up a UI string. Falls back to Hindi, then the key itself.
pub fn t<'a>(lang: Language, key: &'a str) -> &'a str {
    lookup(lang, key)
        .or_else(|| (lang != Language::Hi).then(|| lookup(Language::Hi, key)).flatten())
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_per_language() {
        assert_eq!(t(Language::Hi, "ask-saathi"), "साथी से पूछें");
        assert_eq!(t(Language::En, "ask-saathi"), "Ask Saathi");
        assert_eq!(t(Language::Mr, "ask-saathi"), "साथीला विचारा");
    }

    #[test]
    fn test_missing_key_falls_back_to_hindi() {
        // "search" has no Marathi entry.
        assert_eq!(t(Language::Mr, "search"), "खोजें");
    }

    #[test]
    fn test_unknown_key_returns_key() {
        assert_eq!(t(Language::En, "no-such-key"), "no-such-key");
    }

    #[test]
    fn test_language_parse_defaults_to_hindi() {
        assert_eq!(Language::parse("en"), Language::En);
        assert_eq!(Language::parse("bho"), Language::Hi);
    }

    #[test]
    fn test_every_hindi_key_has_english() {
        for (key, _) in HI {
            assert!(
                EN.iter().any(|(en_key, _)| en_key == key),
                "missing English translation for {key}"
            );
        }
    }
}
