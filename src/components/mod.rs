//! UI Components
//!
//! Reusable Leptos components.

mod expandable_section;

pub use expandable_section::{ExpandableSection, SectionState};
