//! Application layer for cost analysis

pub mod cost_usecase;

pub use cost_usecase::{CostAnalysisUseCase, CostAnalysisUseCaseImpl};
