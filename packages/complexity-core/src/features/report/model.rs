//! Structured analysis report

use crate::features::cost_analysis::domain::ComplexityLabel;
use serde::{Deserialize, Serialize};

/// Labeled field recognized in a free-text report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportField {
    TimeComplexity,
    SpaceComplexity,
    Bottleneck,
    Optimization,
    Rating,
}

impl ReportField {
    pub const ALL: [ReportField; 5] = [
        Self::TimeComplexity,
        Self::SpaceComplexity,
        Self::Bottleneck,
        Self::Optimization,
        Self::Rating,
    ];

    /// Heading as it appears in the report text
    pub fn label(&self) -> &'static str {
        match self {
            Self::TimeComplexity => "Time Complexity",
            Self::SpaceComplexity => "Space Complexity",
            Self::Bottleneck => "Bottleneck",
            Self::Optimization => "Optimization",
            Self::Rating => "Rating",
        }
    }

    /// Case-insensitive lookup, inner whitespace collapsed
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.label().to_ascii_lowercase() == normalized)
    }
}

/// Fenced code block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    /// Info string after the opening fence, if any
    pub language: Option<String>,
    /// Lines between the fences, joined with `\n`
    pub code: String,
}

/// A parsed analysis report. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub time_complexity: Option<String>,
    pub space_complexity: Option<String>,
    pub bottleneck: Option<String>,
    pub optimization: Option<String>,
    /// Score out of 10
    pub rating: Option<u8>,
    pub code_blocks: Vec<CodeBlock>,
}

impl AnalysisReport {
    pub fn time_label(&self) -> Option<ComplexityLabel> {
        self.time_complexity.as_deref().map(ComplexityLabel::parse)
    }

    pub fn space_label(&self) -> Option<ComplexityLabel> {
        self.space_complexity.as_deref().map(ComplexityLabel::parse)
    }

    /// Text value of a field. `Rating` has no text form here.
    pub fn text(&self, field: ReportField) -> Option<&str> {
        match field {
            ReportField::TimeComplexity => self.time_complexity.as_deref(),
            ReportField::SpaceComplexity => self.space_complexity.as_deref(),
            ReportField::Bottleneck => self.bottleneck.as_deref(),
            ReportField::Optimization => self.optimization.as_deref(),
            ReportField::Rating => None,
        }
    }

    pub(crate) fn text_mut(&mut self, field: ReportField) -> Option<&mut Option<String>> {
        match field {
            ReportField::TimeComplexity => Some(&mut self.time_complexity),
            ReportField::SpaceComplexity => Some(&mut self.space_complexity),
            ReportField::Bottleneck => Some(&mut self.bottleneck),
            ReportField::Optimization => Some(&mut self.optimization),
            ReportField::Rating => None,
        }
    }

    /// True when nothing was recognized
    pub fn is_empty(&self) -> bool {
        ReportField::ALL
            .iter()
            .all(|field| self.text(*field).is_none())
            && self.rating.is_none()
            && self.code_blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::cost_analysis::domain::{ColorBand, ComplexityClass};

    #[test]
    fn test_field_from_label() {
        assert_eq!(
            ReportField::from_label("time  COMPLEXITY"),
            Some(ReportField::TimeComplexity)
        );
        assert_eq!(ReportField::from_label("rating"), Some(ReportField::Rating));
        assert_eq!(ReportField::from_label("Summary"), None);
    }

    #[test]
    fn test_labels() {
        let report = AnalysisReport {
            time_complexity: Some("O(n^2)".to_string()),
            space_complexity: Some("O(V + E)".to_string()),
            ..Default::default()
        };
        assert_eq!(
            report.time_label(),
            Some(ComplexityLabel::Known(ComplexityClass::Quadratic))
        );
        assert_eq!(
            report.space_label().map(|l| l.color_band()),
            Some(ColorBand::Fallback)
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(AnalysisReport::default().is_empty());
        let report = AnalysisReport {
            rating: Some(3),
            ..Default::default()
        };
        assert!(!report.is_empty());
    }
}
