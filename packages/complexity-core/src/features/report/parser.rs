//! Report parser
//!
//! Line scanner over free text. Recognized:
//! - `Label: value` lines for the five [`ReportField`]s, tolerating markdown
//!   decoration (`## `, `- `, `1. `, `**Label:**`, `**Label**:`)
//! - continuation lines after a text field, up to the next blank line
//! - fenced code blocks; an unclosed fence runs to the end of the text
//!
//! The first occurrence of a field wins. Parsing never fails.

use super::model::{AnalysisReport, CodeBlock, ReportField};
use lazy_static::lazy_static;
use regex::Regex;

pub const FENCE: &str = "```";

lazy_static! {
    static ref FIELD_LINE: Regex = Regex::new(
        r"(?i)^\s*(?:#{1,6}\s*)?(?:(?:[-+*]|\d+[.)])\s+)?(?:\*\*|__)?\s*(time\s+complexity|space\s+complexity|bottleneck|optimization|rating)\s*(?:\*\*|__)?\s*:\s*(?:\*\*|__)?(.*)$"
    )
    .unwrap();
    static ref RATING_OUT_OF_TEN: Regex = Regex::new(r"(\d+(?:\.\d+)?)\s*/\s*10\b").unwrap();
    static ref BARE_NUMBER: Regex = Regex::new(r"\d+(?:\.\d+)?").unwrap();
}

pub const MAX_RATING: u8 = 10;

/// Parse a rating such as `7/10`, `7.5 / 10` or `8`, clamped to 0..=10
pub fn parse_rating(text: &str) -> Option<u8> {
    let number = RATING_OUT_OF_TEN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .or_else(|| BARE_NUMBER.find(text))?;
    let value: f64 = number.as_str().parse().ok()?;
    Some(value.clamp(0.0, f64::from(MAX_RATING)) as u8)
}

fn clean_value(raw: &str) -> &str {
    raw.trim().trim_matches('*').trim()
}

struct OpenFence {
    language: Option<String>,
    lines: Vec<String>,
}

impl OpenFence {
    fn close(self) -> CodeBlock {
        CodeBlock {
            language: self.language,
            code: self.lines.join("\n"),
        }
    }
}

impl AnalysisReport {
    /// Parse a free-text report
    pub fn parse(text: &str) -> Self {
        let mut report = AnalysisReport::default();
        let mut fence: Option<OpenFence> = None;
        let mut current: Option<ReportField> = None;

        for line in text.lines() {
            let trimmed = line.trim_start();

            if fence.is_some() {
                if trimmed.starts_with(FENCE) {
                    if let Some(open) = fence.take() {
                        report.code_blocks.push(open.close());
                    }
                } else if let Some(open) = fence.as_mut() {
                    open.lines.push(line.to_string());
                }
                continue;
            }

            if let Some(info) = trimmed.strip_prefix(FENCE) {
                let info = info.trim();
                fence = Some(OpenFence {
                    language: (!info.is_empty()).then(|| info.to_string()),
                    lines: Vec::new(),
                });
                current = None;
                continue;
            }

            if let Some(caps) = FIELD_LINE.captures(line) {
                current = None;
                let Some(field) = ReportField::from_label(&caps[1]) else {
                    continue;
                };
                let value = clean_value(&caps[2]);

                if field == ReportField::Rating {
                    if report.rating.is_none() {
                        report.rating = parse_rating(value);
                    }
                    continue;
                }

                match report.text_mut(field) {
                    Some(slot) if slot.is_none() => {
                        *slot = Some(value.to_string());
                        current = Some(field);
                    }
                    _ => tracing::trace!("Duplicate report field {}", field.label()),
                }
                continue;
            }

            if trimmed.is_empty() || trimmed.starts_with('#') {
                current = None;
                continue;
            }

            if let Some(field) = current {
                if let Some(Some(value)) = report.text_mut(field) {
                    if !value.is_empty() {
                        value.push(' ');
                    }
                    value.push_str(trimmed.trim_end());
                }
            }
        }

        if let Some(open) = fence {
            report.code_blocks.push(open.close());
        }

        for field in ReportField::ALL {
            if let Some(slot) = report.text_mut(field) {
                if slot.as_deref().is_some_and(str::is_empty) {
                    *slot = None;
                }
            }
        }

        tracing::debug!(
            "Parsed report (rating={:?}, {} code blocks)",
            report.rating,
            report.code_blocks.len()
        );

        report
    }
}
