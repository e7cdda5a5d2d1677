use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use customer::Customer;
pub use product::Product;

mod customer;
pub mod labels;
mod product;

/// Request body for the rule-based recommender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Customer to recommend for, e.g. `C1000`.
    pub customer_id: String,
    #[serde(default)]
    pub min_price: f64,
    #[serde(default = "default_max_price")]
    pub max_price: f64,
    /// Optional location filter applied to the customer view.
    #[serde(default)]
    pub locations: Option<Vec<String>>,
    /// Optional season filter applied to the customer view.
    #[serde(default)]
    pub seasons: Option<Vec<String>>,
    /// Optional seed for the backfill sampler; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Request body for the embedding-similarity recommender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarRequest {
    pub customer_id: String,
    /// Number of recommendations to return; the configured default applies
    /// when absent.
    #[serde(default)]
    pub top_n: Option<usize>,
    #[serde(default)]
    pub locations: Option<Vec<String>>,
    #[serde(default)]
    pub seasons: Option<Vec<String>>,
}

/// One ranked row from the rule-based recommender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedProduct {
    #[serde(flatten)]
    pub product: Product,
    /// Bucketed reading of the review sentiment score.
    pub sentiment_insight: String,
    /// Product price minus the customer's average order value.
    pub price_delta_vs_avg_order: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub customer_id: String,
    pub recommendations: Vec<RecommendedProduct>,
}

/// One scored row from the similarity recommender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarProduct {
    #[serde(flatten)]
    pub product: Product,
    pub similarity: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarResponse {
    pub customer_id: String,
    pub recommendations: Vec<SimilarProduct>,
}

/// Plain key-value profile data for one customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub customer_id: String,
    pub age: u32,
    pub gender: String,
    pub location: String,
    /// Parsed browsing labels, or the raw text when malformed.
    pub interests: Vec<String>,
    pub past_purchases: Vec<String>,
    pub segment: String,
    pub avg_order_value: f64,
    pub holiday_shopper: String,
    pub season: String,
}

/// Selectable customers plus the distinct values the filters accept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerListResponse {
    pub customer_ids: Vec<String>,
    pub locations: Vec<String>,
    pub seasons: Vec<String>,
}

/// Aggregates over the filtered customer view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub segment_distribution: BTreeMap<String, usize>,
    pub category_interests: BTreeMap<String, usize>,
    pub order_value: OrderValueSummary,
    /// Present when a customer id was supplied for comparison.
    pub customer_avg_order_value: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderValueSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

fn default_max_price() -> f64 {
    f64::MAX
}
