pub mod catalog;
pub mod insights;
pub mod recommendation;
pub mod rule_based;
pub mod sentiment;
pub mod similarity;

// Re-export public types
pub use catalog::Catalog;
pub use recommendation::RecommendationService;
pub use sentiment::SentimentInsight;
pub use similarity::SimilarityIndex;
