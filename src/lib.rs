pub mod analyzers;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use analyzers::analyzer::ConditionAggregator;
pub use analyzers::types::{AnalysisResult, ConditionTable, Observation};
pub use config::AnalyzerConfig;
pub use error::{AnalyzerError, ValidationError};
