//! Section Markup
//!
//! Server-style HTML for expandable sections. The header holds the label
//! (`{id}_div`), the body table carries `{id}`. Labels are tagged with
//! `data-expandable-section` so `dom::bind_rendered_sections` can wire them.

use crate::error::SectionResult;
use crate::models::{validate_id, SectionSpec};
use crate::visibility::Visibility;

/// Attribute naming the section a label controls
pub const SECTION_ATTR: &str = "data-expandable-section";
/// Attribute marking sections that start collapsed
pub const COLLAPSED_ATTR: &str = "data-collapsed";

/// Opening markup: header row with label, then the start of the body table
pub fn render_header(spec: &SectionSpec) -> SectionResult<String> {
    validate_id(&spec.id)?;
    let state = Visibility::from_collapsed(spec.collapsed);
    let id = &spec.id;

    let mut html = String::new();
    html.push_str("<table class='wide-table' margin-top='0' cellpadding='0' cellspacing='0'>\n");
    html.push_str("<tr>\n<td>\n");
    html.push_str("<table class='wide-table expandable-form-header'>\n<tr>\n");
    html.push_str(&format!(
        "<td style='cursor: pointer;' class='portlet-expand-button minimum-icon-size'>\
         <div id='{id}_div' {SECTION_ATTR}='{id}' {COLLAPSED_ATTR}='{collapsed}'>{glyph}</div></td>\n",
        collapsed = spec.collapsed,
        glyph = state.glyph(),
    ));
    html.push_str(&format!("<td>&nbsp;&nbsp;{}</td>\n", escape_html(&spec.title)));
    html.push_str("</tr></table>\n</td>\n</tr>\n</table>\n");
    html.push_str(&format!(
        "<table id='{id}' style='display: {}' class='wide-table' cellpadding='0' cellspacing='0'>\n",
        state.display_value()
    ));
    html.push_str("<td class='form-area-width'>\n");
    Ok(html)
}

/// Closing markup for the body table
pub fn render_footer(spec: &SectionSpec) -> SectionResult<String> {
    validate_id(&spec.id)?;
    Ok("</td>\n</table>\n".to_string())
}

/// Header, caller-supplied body HTML, footer
pub fn render_section(spec: &SectionSpec, body_html: &str) -> SectionResult<String> {
    let mut html = render_header(spec)?;
    html.push_str(body_html);
    html.push_str(&render_footer(spec)?);
    Ok(html)
}

/// Escape text for use in element content or quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
