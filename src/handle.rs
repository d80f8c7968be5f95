//! Toggle Handle
//!
//! Drives a section addressed by id: the collapsible body carries `id`,
//! its indicator label carries `id_div`. The handle stores no visibility
//! state of its own; everything lives in the elements behind `ElementHost`.

use std::collections::HashMap;

use crate::error::{SectionError, SectionResult};
use crate::visibility::Visibility;

/// Suffix appended to a section id to address its label
pub const LABEL_SUFFIX: &str = "_div";

/// Element store a handle reads from and writes to
pub trait ElementHost {
    /// Inline `display` of the element, `None` when no element has `id`.
    /// An unset value is reported as an empty string.
    fn display_of(&self, id: &str) -> Option<String>;

    fn contains(&self, id: &str) -> bool;

    fn set_display(&mut self, id: &str, value: &str) -> SectionResult<()>;

    fn set_text(&mut self, id: &str, text: &str) -> SectionResult<()>;
}

/// Id-addressed handle for one expandable section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleHandle {
    target_id: String,
}

impl ToggleHandle {
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
        }
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn label_id(&self) -> String {
        format!("{}{}", self.target_id, LABEL_SUFFIX)
    }

    /// Flip the section between shown and hidden and update its label.
    ///
    /// Returns `Ok(None)` without touching anything when the body is absent.
    /// A missing label is an error and is detected before any write.
    pub fn toggle<H: ElementHost>(&self, host: &mut H) -> SectionResult<Option<Visibility>> {
        let Some(display) = host.display_of(&self.target_id) else {
            log::debug!("[Section] toggle skipped, no element '{}'", self.target_id);
            return Ok(None);
        };

        let label_id = self.label_id();
        if !host.contains(&label_id) {
            return Err(SectionError::MissingElement(label_id));
        }

        let next = Visibility::from_display(&display).toggled();
        host.set_display(&self.target_id, next.display_value())?;
        host.set_text(&label_id, next.glyph())?;
        log::debug!("[Section] '{}' is now {:?}", self.target_id, next);
        Ok(Some(next))
    }

    /// Hide the section unconditionally. The label is left as is.
    pub fn collapse<H: ElementHost>(&self, host: &mut H) -> SectionResult<()> {
        if !host.contains(&self.target_id) {
            return Err(SectionError::MissingElement(self.target_id.clone()));
        }
        host.set_display(&self.target_id, Visibility::Hidden.display_value())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct MemoryElement {
    display: String,
    text: String,
}

/// In-memory element store for callers without a browser document
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    elements: HashMap<String, MemoryElement>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an element with the given inline display and text
    pub fn insert(&mut self, id: impl Into<String>, display: &str, text: &str) {
        self.elements.insert(
            id.into(),
            MemoryElement {
                display: display.to_string(),
                text: text.to_string(),
            },
        );
    }

    pub fn remove(&mut self, id: &str) {
        self.elements.remove(id);
    }

    pub fn text_of(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text.as_str())
    }

    fn element_mut(&mut self, id: &str) -> SectionResult<&mut MemoryElement> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| SectionError::MissingElement(id.to_string()))
    }
}

impl ElementHost for MemoryHost {
    fn display_of(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|e| e.display.clone())
    }

    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_display(&mut self, id: &str, value: &str) -> SectionResult<()> {
        self.element_mut(id)?.display = value.to_string();
        Ok(())
    }

    fn set_text(&mut self, id: &str, text: &str) -> SectionResult<()> {
        self.element_mut(id)?.text = text.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(display: &str, label: &str) -> MemoryHost {
        let mut host = MemoryHost::new();
        host.insert("entry", display, "");
        host.insert("entry_div", "", label);
        host
    }

    #[test]
    fn test_label_id() {
        let handle = ToggleHandle::new("entry");
        assert_eq!(handle.target_id(), "entry");
        assert_eq!(handle.label_id(), "entry_div");
    }

    #[test]
    fn test_toggle_alternates_from_rendered() {
        let mut host = section("", "+");
        let handle = ToggleHandle::new("entry");

        let expected = [("none", "+"), ("block", "-"), ("none", "+"), ("block", "-")];
        for (display, glyph) in expected {
            handle.toggle(&mut host).unwrap();
            assert_eq!(host.display_of("entry").as_deref(), Some(display));
            assert_eq!(host.text_of("entry_div"), Some(glyph));
        }
    }

    #[test]
    fn test_toggle_reports_new_state() {
        let mut host = section("none", "+");
        let handle = ToggleHandle::new("entry");
        assert_eq!(handle.toggle(&mut host), Ok(Some(Visibility::Visible)));
        assert_eq!(handle.toggle(&mut host), Ok(Some(Visibility::Hidden)));
    }

    #[test]
    fn test_toggle_missing_target_is_noop() {
        let mut host = MemoryHost::new();
        host.insert("entry_div", "", "-");
        let handle = ToggleHandle::new("entry");

        assert_eq!(handle.toggle(&mut host), Ok(None));
        assert_eq!(host.text_of("entry_div"), Some("-"));
        assert!(!host.contains("entry"));
    }

    #[test]
    fn test_toggle_missing_label_fails_without_writing() {
        let mut host = MemoryHost::new();
        host.insert("entry", "block", "");
        let handle = ToggleHandle::new("entry");

        assert_eq!(
            handle.toggle(&mut host),
            Err(SectionError::MissingElement("entry_div".to_string()))
        );
        assert_eq!(host.display_of("entry").as_deref(), Some("block"));

        host.set_display("entry", "none").unwrap();
        assert!(handle.toggle(&mut host).is_err());
        assert_eq!(host.display_of("entry").as_deref(), Some("none"));
    }

    #[test]
    fn test_collapse_is_idempotent() {
        let mut host = section("block", "-");
        let handle = ToggleHandle::new("entry");

        handle.collapse(&mut host).unwrap();
        assert_eq!(host.display_of("entry").as_deref(), Some("none"));
        handle.collapse(&mut host).unwrap();
        assert_eq!(host.display_of("entry").as_deref(), Some("none"));
    }

    #[test]
    fn test_collapse_leaves_label_untouched() {
        let mut host = section("none", "+");
        let handle = ToggleHandle::new("entry");

        handle.collapse(&mut host).unwrap();
        assert_eq!(host.display_of("entry").as_deref(), Some("none"));
        assert_eq!(host.text_of("entry_div"), Some("+"));

        let mut expanded = section("block", "-");
        handle.collapse(&mut expanded).unwrap();
        assert_eq!(expanded.text_of("entry_div"), Some("-"));
    }

    #[test]
    fn test_collapse_missing_target_fails() {
        let mut host = MemoryHost::new();
        let handle = ToggleHandle::new("entry");
        assert_eq!(
            handle.collapse(&mut host),
            Err(SectionError::MissingElement("entry".to_string()))
        );
    }

    #[test]
    fn test_collapse_then_toggle_expands() {
        let mut host = section("", "-");
        let handle = ToggleHandle::new("entry");

        handle.collapse(&mut host).unwrap();
        handle.toggle(&mut host).unwrap();
        assert_eq!(host.display_of("entry").as_deref(), Some("block"));
        assert_eq!(host.text_of("entry_div"), Some("-"));
    }

    #[test]
    fn test_memory_host_remove() {
        let mut host = section("", "+");
        host.remove("entry_div");
        assert!(!host.contains("entry_div"));
        assert!(host.set_text("entry_div", "+").is_err());
    }
}
