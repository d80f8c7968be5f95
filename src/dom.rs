//! Browser Document Host
//!
//! `ElementHost` backed by `web_sys::Document`, plus wiring for sections
//! rendered by `markup`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::error::{SectionError, SectionResult};
use crate::handle::{ElementHost, ToggleHandle};
use crate::markup::{COLLAPSED_ATTR, SECTION_ATTR};
use crate::models::PageConfig;

/// Id of the `<script type="application/json">` holding the page config
pub const CONFIG_SCRIPT_ID: &str = "expandable-sections";
/// Set on labels that already carry a click listener
pub const BOUND_ATTR: &str = "data-section-bound";

fn script_error(err: JsValue) -> SectionError {
    SectionError::Script(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Turn an element lookup into a `display` reading. Only a missing element
/// reads as absent; an element we cannot style still counts as present so
/// the following write reports the failure.
fn display_from_lookup(lookup: SectionResult<String>) -> Option<String> {
    match lookup {
        Ok(display) => Some(display),
        Err(SectionError::MissingElement(_)) => None,
        Err(_) => Some(String::new()),
    }
}

/// Document-backed element store
#[derive(Clone)]
pub struct DocumentHost {
    document: Document,
}

impl DocumentHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Host for the current window's document
    pub fn current() -> SectionResult<Self> {
        web_sys::window()
            .and_then(|win| win.document())
            .map(Self::new)
            .ok_or_else(|| SectionError::Script("no document available".to_string()))
    }

    fn html_element(&self, id: &str) -> SectionResult<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| SectionError::MissingElement(id.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SectionError::Script(format!("element '{}' is not an HTML element", id)))
    }
}

impl ElementHost for DocumentHost {
    fn display_of(&self, id: &str) -> Option<String> {
        display_from_lookup(self.html_element(id).map(|element| {
            element.style().get_property_value("display").unwrap_or_default()
        }))
    }

    fn contains(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn set_display(&mut self, id: &str, value: &str) -> SectionResult<()> {
        self.html_element(id)?
            .style()
            .set_property("display", value)
            .map_err(script_error)
    }

    fn set_text(&mut self, id: &str, text: &str) -> SectionResult<()> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| SectionError::MissingElement(id.to_string()))?;
        element.set_text_content(Some(text));
        Ok(())
    }
}

/// Apply the initial state of each `(section_id, collapsed)` pair and return
/// handles for the sections that are ready to be clicked. Sections whose
/// body or label is missing, or whose collapse fails, are logged and skipped.
pub fn prepare_sections<H: ElementHost>(host: &mut H, sections: &[(String, bool)]) -> Vec<ToggleHandle> {
    let mut ready = Vec::new();
    for (section_id, collapsed) in sections {
        let handle = ToggleHandle::new(section_id.clone());
        if !host.contains(handle.target_id()) {
            log::error!("[Dom] Section '{}' has no body, not binding", section_id);
            continue;
        }
        if !host.contains(&handle.label_id()) {
            log::error!("[Dom] Section '{}' has no label '{}', not binding", section_id, handle.label_id());
            continue;
        }
        if *collapsed {
            if let Err(e) = handle.collapse(host) {
                log::error!("[Dom] Collapse '{}' failed: {}", section_id, e);
                continue;
            }
        }
        ready.push(handle);
    }
    ready
}

/// Selector for section labels that have no click listener yet
fn unbound_label_selector() -> String {
    format!("[{}]:not([{}])", SECTION_ATTR, BOUND_ATTR)
}

/// Wire every not-yet-bound section label under `root`: collapse the ones
/// marked collapsed, then attach a click listener. Returns the number of
/// sections bound by this call.
pub fn bind_rendered_sections(root: &Element) -> SectionResult<usize> {
    let document = root
        .owner_document()
        .ok_or_else(|| SectionError::Script("element is not attached to a document".to_string()))?;
    let labels = root
        .query_selector_all(&unbound_label_selector())
        .map_err(script_error)?;

    let mut found = Vec::new();
    for index in 0..labels.length() {
        let Some(label) = labels.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(section_id) = label.get_attribute(SECTION_ATTR) else {
            continue;
        };
        let collapsed = label.get_attribute(COLLAPSED_ATTR).as_deref() == Some("true");
        found.push((section_id, label, collapsed));
    }

    let mut host = DocumentHost::new(document);
    let pairs: Vec<(String, bool)> = found.iter().map(|(id, _, collapsed)| (id.clone(), *collapsed)).collect();
    let ready = prepare_sections(&mut host, &pairs);

    let mut bound = 0;
    for handle in ready {
        let Some((_, label, _)) = found.iter().find(|(id, _, _)| id.as_str() == handle.target_id()) else {
            continue;
        };
        let section_id = handle.target_id().to_string();
        match bind_click(label, handle, host.clone()) {
            Ok(()) => bound += 1,
            Err(e) => log::error!("[Dom] Binding '{}' failed: {}", section_id, e),
        }
    }

    log::info!("[Dom] Bound {} of {} rendered sections", bound, found.len());
    Ok(bound)
}

fn bind_click(label: &Element, handle: ToggleHandle, mut host: DocumentHost) -> SectionResult<()> {
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        if let Err(e) = handle.toggle(&mut host) {
            log::error!("[Dom] Toggle '{}' failed: {}", handle.target_id(), e);
        }
    });
    label
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(script_error)?;
    on_click.forget();
    label.set_attribute(BOUND_ATTR, "true").map_err(script_error)?;
    Ok(())
}

/// Page config embedded in the document, `None` when the page has none
pub fn load_page_config(document: &Document) -> SectionResult<Option<PageConfig>> {
    let Some(script) = document.get_element_by_id(CONFIG_SCRIPT_ID) else {
        return Ok(None);
    };
    let json = script.text_content().unwrap_or_default();
    PageConfig::from_json(&json).map(Some)
}
