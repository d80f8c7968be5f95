//! Section Models
//!
//! Page configuration describing which expandable sections to render.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};

/// One expandable section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub id: String,
    pub title: String,
    /// Initial state, `true` renders the body hidden
    #[serde(default)]
    pub collapsed: bool,
}

impl SectionSpec {
    pub fn new(id: impl Into<String>, title: impl Into<String>, collapsed: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            collapsed,
        }
    }
}

/// All sections shown on a page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
}

impl PageConfig {
    /// Parse and validate a JSON page config
    pub fn from_json(json: &str) -> SectionResult<Self> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Ids must be well formed and unique across the page
    pub fn validate(&self) -> SectionResult<()> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            validate_id(&section.id)?;
            if !seen.insert(section.id.as_str()) {
                return Err(SectionError::InvalidConfig(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
        }
        Ok(())
    }
}

/// Section ids end up in HTML attributes, keep them to `[A-Za-z0-9_-]`
pub fn validate_id(id: &str) -> SectionResult<()> {
    if id.is_empty() {
        return Err(SectionError::InvalidConfig("empty section id".to_string()));
    }
    if let Some(bad) = id.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-')) {
        return Err(SectionError::InvalidConfig(format!(
            "section id '{}' contains '{}'",
            id, bad
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_defaults() {
        let config = PageConfig::from_json(r#"{"sections":[{"id":"a","title":"A"}]}"#).unwrap();
        assert_eq!(config.sections, vec![SectionSpec::new("a", "A", false)]);

        let empty = PageConfig::from_json("{}").unwrap();
        assert!(empty.sections.is_empty());
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = r#"{"sections":[
            {"id":"a","title":"A"},
            {"id":"a","title":"Again","collapsed":true}
        ]}"#;
        assert!(matches!(
            PageConfig::from_json(json),
            Err(SectionError::InvalidConfig(msg)) if msg.contains("duplicate")
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            PageConfig::from_json("{\"sections\": 3}"),
            Err(SectionError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("entry-1_meta").is_ok());
        assert!(validate_id("").is_err());
        assert!(validate_id("a b").is_err());
        assert!(validate_id("x'><script>").is_err());
    }
}
