use log::warn;
use serde::Deserialize;

const HOME_JSON: &str = include_str!("../content/home.json");

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub cta_primary: String,
    pub cta_secondary: String,
    #[serde(default)]
    pub services: Vec<ServiceCard>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ServiceCard {
    pub title: String,
    pub desc: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub q: String,
    pub a: String,
}

pub fn parse(raw: &str) -> Result<HomeContent, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Copy for the landing page. Falls back to empty copy rather than failing
/// the whole page if the embedded document is broken.
pub fn home() -> HomeContent {
    match parse(HOME_JSON) {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to parse home content: {}", e);
            HomeContent::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = parse(HOME_JSON).expect("home.json must stay valid");
        assert_eq!(content.services.len(), 3);
        assert_eq!(content.faq.len(), 4);
        assert!(!content.hero_title.is_empty());
    }

    #[test]
    fn lists_are_optional() {
        let content = parse(
            r#"{"heroTitle":"a","heroSubtitle":"b","ctaPrimary":"c","ctaSecondary":"d"}"#,
        )
        .unwrap();
        assert!(content.services.is_empty());
        assert!(content.faq.is_empty());
    }

    #[test]
    fn missing_title_is_rejected() {
        assert!(parse(r#"{"heroSubtitle":"b"}"#).is_err());
    }
}
