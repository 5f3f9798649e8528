//! HTML table renderer for ranked results.

use crate::domain::topsis::ResultTable;
use crate::ports::{ExportError, ExportFormat, ExportedResult, ResultExporter};

/// CSS classes applied to the rendered `<table>`.
const TABLE_CLASSES: &str = "table table-bordered table-striped";

/// Renders the result table as an HTML `<table>` fragment.
#[derive(Debug, Clone, Default)]
pub struct HtmlResultExporter;

impl HtmlResultExporter {
    pub fn new() -> Self {
        Self
    }

    /// Renders the fragment. All cell text is escaped.
    pub fn render(table: &ResultTable) -> String {
        let mut html = String::new();
        html.push_str(&format!("<table class=\"{}\">\n", TABLE_CLASSES));

        html.push_str("  <thead>\n    <tr>");
        for header in table.headers() {
            html.push_str(&format!("<th>{}</th>", escape(header)));
        }
        html.push_str("</tr>\n  </thead>\n  <tbody>\n");

        for row in table.rows() {
            html.push_str("    <tr>");
            html.push_str(&format!("<td>{}</td>", escape(&row.identifier)));
            for value in &row.criteria {
                html.push_str(&format!("<td>{}</td>", value));
            }
            html.push_str(&format!("<td>{}</td><td>{}</td>", row.score, row.rank));
            html.push_str("</tr>\n");
        }

        html.push_str("  </tbody>\n</table>\n");
        html
    }
}

impl ResultExporter for HtmlResultExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Html
    }

    fn export(&self, table: &ResultTable) -> Result<ExportedResult, ExportError> {
        Ok(ExportedResult::new(Self::render(table), ExportFormat::Html, "result"))
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::{RawTable, TopsisRanker};

    fn ranked(first_id: &str) -> ResultTable {
        let raw = RawTable::builder()
            .headers(vec!["Model", "Price"])
            .row(vec![first_id, "1"])
            .row(vec!["M2", "2"])
            .build();
        TopsisRanker::rank(&raw, "1", "+").unwrap()
    }

    #[test]
    fn renders_bootstrap_table() {
        let html = HtmlResultExporter::render(&ranked("M1"));

        assert!(html.starts_with("<table class=\"table table-bordered table-striped\">"));
        assert!(html.contains("<th>Model</th><th>Price</th><th>Topsis Score</th><th>Rank</th>"));
        assert!(html.contains("<tr><td>M2</td><td>2</td><td>1.000000</td><td>1</td></tr>"));
    }

    #[test]
    fn escapes_cell_text() {
        let html = HtmlResultExporter::render(&ranked("<b>&\"x\"</b>"));
        assert!(html.contains("<td>&lt;b&gt;&amp;&quot;x&quot;&lt;/b&gt;</td>"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn export_reports_html_format() {
        let exported = HtmlResultExporter::new().export(&ranked("M1")).unwrap();
        assert_eq!(exported.format, ExportFormat::Html);
        assert_eq!(exported.filename, "result.html");
    }
}
