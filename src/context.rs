//! Sections Context
//!
//! Page-wide signals shared with every expandable section.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SectionsContext {
    /// Bumped each time the page asks all sections to collapse - read
    pub collapse_trigger: ReadSignal<u32>,
    /// Bumped each time the page asks all sections to collapse - write
    set_collapse_trigger: WriteSignal<u32>,
}

impl SectionsContext {
    pub fn new(collapse_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            collapse_trigger: collapse_trigger.0,
            set_collapse_trigger: collapse_trigger.1,
        }
    }

    /// Collapse every section on the page
    pub fn collapse_all(&self) {
        self.set_collapse_trigger.update(|v| *v += 1);
    }
}
