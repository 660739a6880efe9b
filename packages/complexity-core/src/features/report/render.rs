//! HTML rendering of a parsed report
//!
//! Complexity values carry their colour band class; code blocks go
//! through the highlighter.

use super::model::{AnalysisReport, CodeBlock, ReportField};
use super::parser::MAX_RATING;
use crate::features::cost_analysis::domain::ColorBand;
use crate::features::lexical::{escape_html, Highlighter};

/// Keep only characters safe inside a class attribute
fn language_class(language: &str) -> String {
    language
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+'))
        .collect()
}

fn render_code_block(block: &CodeBlock, highlighter: &Highlighter, out: &mut String) {
    let class = block
        .language
        .as_deref()
        .map(language_class)
        .filter(|class| !class.is_empty());

    out.push_str("<pre><code");
    if let Some(class) = class {
        out.push_str(" class=\"language-");
        out.push_str(&class);
        out.push('"');
    }
    out.push('>');
    out.push_str(&highlighter.render(&block.code));
    out.push_str("</code></pre>\n");
}

impl AnalysisReport {
    /// Render as an HTML fragment
    pub fn render_html(&self, highlighter: &Highlighter) -> String {
        let mut out = String::from("<section class=\"analysis-report\">\n");

        let has_fields =
            ReportField::ALL.iter().any(|f| self.text(*f).is_some()) || self.rating.is_some();
        if has_fields {
            out.push_str("<dl>\n");
            for field in ReportField::ALL {
                let value = match field {
                    ReportField::Rating => self.rating.map(|r| format!("{}/{}", r, MAX_RATING)),
                    _ => self.text(field).map(escape_html),
                };
                let Some(value) = value else {
                    continue;
                };

                let band = match field {
                    ReportField::TimeComplexity | ReportField::SpaceComplexity => {
                        self.text(field).map(ColorBand::for_label)
                    }
                    _ => None,
                };

                out.push_str("<dt>");
                out.push_str(field.label());
                out.push_str("</dt>");
                match band {
                    Some(band) => {
                        out.push_str("<dd class=\"");
                        out.push_str(band.css_class());
                        out.push_str("\">");
                    }
                    None => out.push_str("<dd>"),
                }
                out.push_str(&value);
                out.push_str("</dd>\n");
            }
            out.push_str("</dl>\n");
        }

        for block in &self.code_blocks {
            render_code_block(block, highlighter, &mut out);
        }

        out.push_str("</section>\n");
        out
    }
}
