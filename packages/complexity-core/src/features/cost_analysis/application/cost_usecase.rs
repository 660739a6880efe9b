//! Cost Analysis UseCase

use crate::config::EstimatorConfig;
use crate::features::cost_analysis::domain::Estimate;
use crate::features::cost_analysis::infrastructure::CostAnalyzer;

/// Cost Analysis UseCase Trait
///
/// The seam an editor integration calls when its remote analyzer is
/// unavailable.
pub trait CostAnalysisUseCase: Send + Sync {
    fn analyze_cost(&self, code: &str) -> Estimate;

    fn analyze_costs(&self, snippets: &[&str]) -> Vec<Estimate> {
        snippets.iter().map(|code| self.analyze_cost(code)).collect()
    }
}

/// Cost Analysis UseCase Implementation
pub struct CostAnalysisUseCaseImpl {
    analyzer: CostAnalyzer,
}

impl CostAnalysisUseCaseImpl {
    pub fn new(config: &EstimatorConfig) -> Self {
        Self {
            analyzer: CostAnalyzer::new(config),
        }
    }

    pub fn analyzer(&self) -> &CostAnalyzer {
        &self.analyzer
    }
}

impl Default for CostAnalysisUseCaseImpl {
    fn default() -> Self {
        Self::new(&EstimatorConfig::default())
    }
}

impl CostAnalysisUseCase for CostAnalysisUseCaseImpl {
    fn analyze_cost(&self, code: &str) -> Estimate {
        self.analyzer.analyze(code)
    }

    fn analyze_costs(&self, snippets: &[&str]) -> Vec<Estimate> {
        self.analyzer.analyze_batch(snippets)
    }
}
