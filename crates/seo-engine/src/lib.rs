pub mod analyzers;
pub mod error;
#[cfg(test)]
mod fixtures;
pub mod model;
pub mod readability;
pub mod scorer;
pub mod service;
pub mod text;

pub use error::EngineError;
pub use model::{
    AnalysisResult, BlogPost, Category, CategoryDetails, CategoryResult, FleschResult, Priority,
    ReadingGrade, Recommendation,
};
pub use scorer::{ScoreWeights, SeoScoreGenerator};
pub use service::BlogSeoService;
