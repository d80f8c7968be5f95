//! Expandable Sections App
//!
//! Demo page: configured sections rendered as components, and the same
//! sections rendered as server-style markup bound to the DOM after mount.

use leptos::prelude::*;

use crate::components::ExpandableSection;
use crate::context::SectionsContext;
use crate::dom;
use crate::markup::{self, escape_html};
use crate::models::{PageConfig, SectionSpec};

/// Sections shown when the page embeds no config
pub fn demo_config() -> PageConfig {
    PageConfig {
        sections: vec![
            SectionSpec::new("entry", "Entry", false),
            SectionSpec::new("links", "Links", true),
            SectionSpec::new("categories", "Categories", false),
        ],
    }
}

fn page_config() -> PageConfig {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return demo_config();
    };
    match dom::load_page_config(&document) {
        Ok(Some(config)) => config,
        Ok(None) => demo_config(),
        Err(e) => {
            log::error!("[App] Ignoring page config: {}", e);
            demo_config()
        }
    }
}

/// Markup for every section, skipping any that fail to render
pub fn render_page(config: &PageConfig) -> String {
    let mut html = String::new();
    for spec in &config.sections {
        let body = format!("<p>{} content</p>", escape_html(&spec.title));
        match markup::render_section(spec, &body) {
            Ok(section) => html.push_str(&section),
            Err(e) => log::warn!("[App] Skipping section '{}': {}", spec.id, e),
        }
    }
    html
}

#[component]
pub fn App() -> impl IntoView {
    let (collapse_trigger, set_collapse_trigger) = signal(0u32);
    let ctx = SectionsContext::new((collapse_trigger, set_collapse_trigger));
    provide_context(ctx);

    let config = page_config();
    let rendered = render_page(&config);
    let markup_container = NodeRef::<leptos::html::Div>::new();

    // Wire rendered labels once the markup is in the document
    Effect::new(move |_| {
        let Some(container) = markup_container.get() else {
            return;
        };
        if let Err(e) = dom::bind_rendered_sections(&container) {
            log::error!("[App] Binding rendered sections failed: {}", e);
        }
    });

    view! {
        <main class="main-content">
            <h1>"Expandable Sections"</h1>
            <button class="collapse-all-btn" on:click=move |_| ctx.collapse_all()>
                "Collapse all"
            </button>

            {config
                .sections
                .into_iter()
                .map(|spec| {
                    let body = format!("{} content", spec.title);
                    view! {
                        <ExpandableSection title=spec.title collapsed=spec.collapsed>
                            <p>{body}</p>
                        </ExpandableSection>
                    }
                })
                .collect_view()}

            <h2>"Rendered markup"</h2>
            <div class="rendered-sections" node_ref=markup_container inner_html=rendered></div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_page_includes_every_section() {
        let html = render_page(&demo_config());
        assert!(html.contains("<table id='entry' style='display: block'"));
        assert!(html.contains("<table id='links' style='display: none'"));
        assert!(html.contains("<p>Categories content</p>"));
    }

    #[test]
    fn test_render_page_skips_invalid_sections() {
        let config = PageConfig {
            sections: vec![
                SectionSpec::new("ok", "Ok", false),
                SectionSpec::new("not ok", "Broken", false),
            ],
        };
        let html = render_page(&config);
        assert!(html.contains("id='ok_div'"));
        assert!(!html.contains("Broken"));
    }

    #[test]
    fn test_demo_config_is_valid() {
        assert!(demo_config().validate().is_ok());
    }
}
