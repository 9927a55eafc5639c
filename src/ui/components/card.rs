//! Job card component.

use crate::app::Section;
use crate::ui::viewmodel::{CardView, PanelView};
use std::fmt::Write;

/// Appends one job card.
///
/// Layout:
///
/// ```text
/// <div class="job">
///   <h4>title</h4>
///   <div class="meta">city • category • $pay (pay_type)</div>
///   <div class="small">description</div>
///   [Apply] [Post a job]
///   [application panel, only while open]
/// </div>
/// ```
pub fn render_card(out: &mut String, card: &CardView) {
    let key = &card.key;

    out.push_str("<div class=\"job\">");
    let _ = write!(out, "<h4>{}</h4>", card.title);
    let _ = write!(
        out,
        "<div class=\"meta\">{} • {} • <strong>${}</strong> ({})</div>",
        card.city, card.category, card.pay, card.pay_type
    );
    let _ = write!(out, "<div class=\"small\">{}</div>", card.description);
    if let Some(posted) = &card.posted {
        let _ = write!(out, "<div class=\"small muted\">Posted {posted}</div>");
    }

    out.push_str("<div class=\"actions\">");
    let _ = write!(
        out,
        "<button class=\"btn btn--primary\" {}=\"{key}\">Apply</button>",
        card.apply.control.attribute()
    );
    let _ = write!(
        out,
        "<a class=\"btn btn--ghost\" href=\"#{}\">Post a job</a>",
        Section::Post.anchor()
    );
    out.push_str("</div>");

    if let Some(panel) = &card.panel {
        render_panel(out, key, panel);
    }

    out.push_str("</div>");
}

fn render_panel(out: &mut String, key: &str, panel: &PanelView) {
    let _ = write!(out, "<div class=\"apply\" id=\"apply-{key}\">");
    let _ = write!(
        out,
        "<input placeholder=\"Your name\" id=\"name-{key}\" value=\"{}\" />",
        panel.name
    );
    let _ = write!(
        out,
        "<input placeholder=\"Phone or email\" id=\"contact-{key}\" value=\"{}\" />",
        panel.contact
    );
    let _ = write!(
        out,
        "<textarea placeholder=\"Message (optional)\" id=\"msg-{key}\">{}</textarea>",
        panel.message
    );
    let _ = write!(
        out,
        "<button class=\"btn btn--primary\" {}=\"{key}\">Send application</button>",
        panel.send.control.attribute()
    );
    let _ = write!(out, "<div class=\"small\" id=\"status-{key}\">{}</div>", panel.status);
    out.push_str("</div>");
}
