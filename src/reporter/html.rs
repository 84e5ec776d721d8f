//! HTML reporter: renders grouped lint issues into a static page
//!
//! The markup is produced server-side and substituted into a template at the
//! placeholder token. The bundled template carries its own CSS and a small
//! script that expands and collapses each file section.

use super::escape::{encode_uri_component, sanitize};
use crate::{FileGroup, GroupedReport, IssueRecord, ReportError, Result, Summary};
use std::borrow::Cow;
use std::path::Path;

/// Marker in the template that is replaced by the rendered issue list
pub const PLACEHOLDER: &str = "##placeholder##";

/// Reporter that fills an HTML template with the issue list
pub struct HtmlReporter {
    template: Cow<'static, str>,
}

impl HtmlReporter {
    /// Create a reporter using the bundled template
    pub fn new() -> Self {
        Self {
            template: Cow::Borrowed(DEFAULT_TEMPLATE),
        }
    }

    /// Use a caller-supplied template instead of the bundled one
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Cow::Owned(template.into());
        self
    }

    /// Load the template from a file
    pub fn from_template_file(path: &Path) -> Result<Self> {
        let template =
            std::fs::read_to_string(path).map_err(|source| ReportError::TemplateReadFailure {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new().with_template(template))
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Generate the full HTML document
    pub fn report(&self, report: &GroupedReport, summary: &Summary) -> String {
        render(&self.template, report, summary)
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Substitute the rendered issue list into `template`.
///
/// Only the first [`PLACEHOLDER`] is replaced; a template without one comes
/// back unchanged.
pub fn render(template: &str, report: &GroupedReport, summary: &Summary) -> String {
    let content = render_content(report, summary);
    let wrapped = format!(
        "<div class=\"result-outer-wrap\">{}</div>",
        content.trim()
    );
    template.replacen(PLACEHOLDER, &wrapped, 1)
}

fn render_content(report: &GroupedReport, summary: &Summary) -> String {
    let mut html = String::with_capacity(4096 + report.issue_count() * 384);
    html.push_str(&format!("<h3>Total Issues: {}</h3>", summary.total_issues));

    if report.is_empty() {
        html.push_str("<h2>No errors!</h2>");
        return html;
    }

    for group in report.groups() {
        push_group(&mut html, group);
    }
    html
}

fn push_group(html: &mut String, group: &FileGroup) {
    html.push_str("<button class=\"file-name clearfix\">");
    html.push_str(&sanitize(&group.file_name));
    html.push_str(&format!(
        " <em class=\"float-right\">({} issue(s) found) <span>+</span></em></button>",
        group.issues.len()
    ));
    html.push_str("<div class=\"result-wrap\"><ul>");
    html.push_str(
        "<li class=\"item-head\"><span>Description</span><span>Rule</span><span>Error</span><span>Position</span></li>",
    );
    for issue in &group.issues {
        push_issue(html, issue);
    }
    html.push_str("</ul></div>");
}

fn push_issue(html: &mut String, issue: &IssueRecord) {
    html.push_str(&format!(
        "<li title=\"{}\" class=\"item is-{}\">",
        sanitize(&encode_uri_component(&issue.path)),
        sanitize(&issue.severity.to_lowercase())
    ));
    html.push_str(&format!(
        "<span class=\"item-cell failure\">{}</span>",
        sanitize(&issue.message)
    ));
    html.push_str(&format!(
        "<span class=\"item-cell rule\">{}</span>",
        sanitize(&issue.rule)
    ));
    html.push_str(&format!(
        "<span class=\"item-cell type\">{}</span>",
        sanitize(&issue.severity)
    ));
    html.push_str(&format!(
        "<span class=\"item-cell position\">{}</span>",
        sanitize(&issue.position)
    ));
    html.push_str("</li>");
}

/// Bundled report page
pub const DEFAULT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Lint Report</title>
<style>
:root{--bg:#f6f7f9;--surface:#fff;--border:#dde1e6;--text:#1f2328;--muted:#656d76;--red:#cf222e;--yellow:#9a6700;--blue:#0969da;--radius:6px}
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,Oxygen,sans-serif;background:var(--bg);color:var(--text);line-height:1.5;padding:1.5rem}
header{margin-bottom:1rem}
header h1{font-size:1.25rem;font-weight:700}
.clearfix::after{content:"";display:table;clear:both}
.float-right{float:right}
.result-outer-wrap{max-width:1200px;margin:0 auto}
.result-outer-wrap h3{font-size:1rem;margin-bottom:.75rem}
.result-outer-wrap h2{font-size:1.125rem;color:var(--blue);text-align:center;padding:3rem 1rem}

/* ── File toggles ── */
.file-name{display:block;width:100%;text-align:left;padding:.625rem .875rem;margin-top:.5rem;background:var(--surface);border:1px solid var(--border);border-radius:var(--radius);font-size:.875rem;font-weight:600;color:var(--text);cursor:pointer}
.file-name:hover{background:#eef1f4}
.file-name em{font-style:normal;font-weight:400;color:var(--muted)}
.file-name em span{display:inline-block;width:1rem;text-align:center;font-weight:700}
.result-wrap{display:none;border:1px solid var(--border);border-top:none;border-radius:0 0 var(--radius) var(--radius);background:var(--surface)}
.result-wrap.open{display:block}

/* ── Issue rows ── */
.result-wrap ul{list-style:none}
.item-head,.item{display:grid;grid-template-columns:minmax(0,1fr) 200px 90px 140px;gap:.5rem;padding:.4rem .875rem;font-size:.8125rem;border-bottom:1px solid var(--border)}
.item:last-child{border-bottom:none}
.item-head{font-weight:700;color:var(--muted);text-transform:uppercase;font-size:.6875rem;letter-spacing:.4px}
.item-cell{overflow-wrap:anywhere}
.item-cell.rule,.item-cell.position{font-family:'SF Mono',Consolas,monospace;color:var(--muted)}
.item-cell.type{font-weight:700}
.is-error .type{color:var(--red)}
.is-warning .type{color:var(--yellow)}
</style>
</head>
<body>
<header><h1>Lint Report</h1></header>
##placeholder##
<script>
(function(){
"use strict";
document.querySelectorAll('.file-name').forEach(function(btn){
  btn.addEventListener('click',function(){
    var wrap=btn.nextElementSibling;
    if(!wrap) return;
    var open=wrap.classList.toggle('open');
    var marker=btn.querySelector('em span');
    if(marker) marker.textContent=open?'-':'+';
  });
});
})();
</script>
</body>
</html>
"##;
