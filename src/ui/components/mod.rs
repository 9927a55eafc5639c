//! Composable HTML component renderers.
//!
//! Each component appends markup for one part of the page to a `String`.
//! Components interpolate view model text as-is: it was escaped during
//! projection.
//!
//! # Components
//!
//! - [`card`]: one job card with its optional application panel
//! - [`empty`]: the "no jobs found" block
//! - [`post_form`]: the "post a job" form
//!
//! # Layout
//!
//! ```text
//! [Search bar]
//! <section id="jobs">
//!   [Loading marker | Search notice]
//!   [Cards | Empty state]
//! </section>
//! [Post form]
//! ```

mod card;
mod empty;
mod post_form;

pub use card::render_card;
pub use empty::render_empty_state;
pub use post_form::render_post_form;

use crate::app::Section;
use crate::ui::viewmodel::{PageView, SearchBarView};
use std::fmt::Write;

/// Renders the full page fragment.
#[must_use]
pub fn render_page(page: &PageView) -> String {
    let mut out = String::with_capacity(1024);

    render_search_bar(&mut out, &page.search_bar);

    let _ = write!(out, "<section id=\"{}\">", Section::Jobs.anchor());
    if page.loading {
        out.push_str("<div class=\"small\" id=\"loading\">Loading...</div>");
    }
    if let Some(notice) = &page.search_notice {
        let _ = write!(out, "<div class=\"notice\" id=\"searchNotice\">{notice}</div>");
    }

    out.push_str("<div id=\"jobsList\">");
    for card in &page.jobs.cards {
        render_card(&mut out, card);
    }
    out.push_str("</div>");

    if let Some(empty) = &page.jobs.empty_state {
        render_empty_state(&mut out, empty);
    }
    out.push_str("</section>");

    render_post_form(&mut out, &page.post_form);

    out
}

fn render_search_bar(out: &mut String, bar: &SearchBarView) {
    let _ = write!(
        out,
        "<div class=\"search\"><input id=\"q\" value=\"{}\" /><input id=\"city\" value=\"{}\" />\
         <input id=\"category\" value=\"{}\" />\
         <button id=\"searchBtn\">Search</button><button id=\"refreshBtn\">Refresh</button></div>",
        bar.query, bar.city, bar.category
    );
}
