//! "Post a job" form component.

use crate::app::Section;
use crate::ui::viewmodel::PostFormView;
use std::fmt::Write;

pub fn render_post_form(out: &mut String, form: &PostFormView) {
    let _ = write!(out, "<section id=\"{}\"><form id=\"postForm\">", Section::Post.anchor());
    for (name, value) in &form.fields {
        if *name == "description" {
            let _ = write!(out, "<textarea name=\"{name}\">{value}</textarea>");
        } else {
            let _ = write!(out, "<input name=\"{name}\" value=\"{value}\" />");
        }
    }
    out.push_str("<button class=\"btn btn--primary\" type=\"submit\">Post job</button>");
    let _ = write!(out, "<div class=\"small\" id=\"postMsg\">{}</div>", form.status);
    out.push_str("</form></section>");
}
