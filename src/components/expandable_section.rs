//! Expandable Section Component
//!
//! Header label and collapsible body paired in one view. The visibility
//! lives in a signal; the glyph and the body's `display` are derived from it.

use leptos::prelude::*;

use crate::context::SectionsContext;
use crate::visibility::Visibility;

/// View-model behind an expandable section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionState {
    visibility: Visibility,
}

impl SectionState {
    pub fn new(collapsed: bool) -> Self {
        Self {
            visibility: Visibility::from_collapsed(collapsed),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Flip visibility, returning the new state
    pub fn toggle(&mut self) -> Visibility {
        self.visibility = self.visibility.toggled();
        self.visibility
    }

    pub fn collapse(&mut self) {
        self.visibility = Visibility::Hidden;
    }
}

/// Expandable section with a `+`/`-` indicator in its header
///
/// # Arguments
/// * `title` - Text shown next to the indicator
/// * `collapsed` - Start with the body hidden
#[component]
pub fn ExpandableSection(
    #[prop(into)] title: String,
    #[prop(optional)] collapsed: bool,
    children: Children,
) -> impl IntoView {
    let state = RwSignal::new(SectionState::new(collapsed));
    let visibility = move || state.get().visibility();

    // Follow "collapse all" requests from the page
    if let Some(ctx) = use_context::<SectionsContext>() {
        Effect::new(move |_| {
            if ctx.collapse_trigger.get() > 0 {
                state.update(|s| s.collapse());
            }
        });
    }

    let on_toggle = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        state.update(|s| {
            let next = s.toggle();
            log::debug!("[Section] toggled to {:?}", next);
        });
    };

    view! {
        <div class="expandable-section">
            <div class="expandable-form-header" on:click=on_toggle>
                <span class="portlet-expand-button minimum-icon-size">
                    {move || visibility().glyph()}
                </span>
                <span class="section-title">{title}</span>
            </div>
            <div class="form-area-width" style:display=move || visibility().display_value()>
                {children()}
            </div>
        </div>
    }
}
