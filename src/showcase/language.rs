use std::fmt;

use crate::config;

/// One of the three dubbed variants of the demo video.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DemoLanguage {
    #[default]
    English,
    Russian,
    Spanish,
}

impl DemoLanguage {
    pub const ALL: [DemoLanguage; 3] = [
        DemoLanguage::English,
        DemoLanguage::Russian,
        DemoLanguage::Spanish,
    ];

    pub fn code(self) -> &'static str {
        match self {
            DemoLanguage::English => "en",
            DemoLanguage::Russian => "ru",
            DemoLanguage::Spanish => "es",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DemoLanguage::English => "EN",
            DemoLanguage::Russian => "RU",
            DemoLanguage::Spanish => "ES",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            DemoLanguage::English => "🇺🇸",
            DemoLanguage::Russian => "🇷🇺",
            DemoLanguage::Spanish => "🇪🇸",
        }
    }

    pub fn source_url(self) -> String {
        format!("{}/{}.mp4", config::DEMO_ASSET_DIR, self.code())
    }
}

impl fmt::Display for DemoLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_language_has_its_own_source() {
        let sources: HashSet<String> = DemoLanguage::ALL.iter().map(|l| l.source_url()).collect();
        assert_eq!(sources.len(), 3);
        assert_eq!(DemoLanguage::Russian.source_url(), "/demo/ru.mp4");
    }

    #[test]
    fn primary_language_is_english() {
        assert_eq!(DemoLanguage::default(), DemoLanguage::ALL[0]);
        assert_eq!(DemoLanguage::default().to_string(), "EN");
    }
}
