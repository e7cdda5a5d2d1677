use crate::error::{ApiError, Result};
use crate::ml::TextEmbedder;
use crate::models::{
    Customer, InsightsResponse, ProfileResponse, RecommendationRequest, RecommendationResponse,
    RecommendedProduct, SimilarRequest, SimilarResponse,
};
use crate::services::catalog::Catalog;
use crate::services::insights;
use crate::services::rule_based;
use crate::services::sentiment::SentimentInsight;
use crate::services::similarity::SimilarityIndex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{info, warn};

/// Composition layer the HTTP handlers call. Owns the catalog snapshot and
/// the product vector index; every request is pure computation over them.
/// All failures leave this boundary as typed `ApiError`s, never panics.
pub struct RecommendationService {
    catalog: Arc<Catalog>,
    index: SimilarityIndex,
    default_top_n: usize,
}

impl RecommendationService {
    pub fn new(catalog: Arc<Catalog>, embedder: TextEmbedder, default_top_n: usize) -> Self {
        let index = SimilarityIndex::build(embedder, &catalog.products);
        Self {
            catalog,
            index,
            default_top_n,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Customer lookup contract: search the filtered view first, retry the
    /// unfiltered table when the filters excluded the id, then report a hard
    /// not-found.
    pub fn find_customer(
        &self,
        customer_id: &str,
        locations: Option<&[String]>,
        seasons: Option<&[String]>,
    ) -> Result<&Customer> {
        if customer_id.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "Customer id cannot be empty".to_string(),
            ));
        }

        let filtered = self.catalog.filtered_customers(locations, seasons);
        if let Some(customer) = filtered
            .into_iter()
            .find(|c| c.customer_id == customer_id)
        {
            return Ok(customer);
        }

        if let Some(customer) = self.catalog.find_customer(customer_id) {
            warn!(
                "Customer {customer_id} not in the filtered view; using unfiltered record"
            );
            return Ok(customer);
        }

        Err(ApiError::NotFound(format!(
            "Customer {customer_id} not found in the dataset"
        )))
    }

    /// Rule-based top-3 with sentiment labels and the customer's spending
    /// delta attached to each row.
    pub fn recommend(&self, request: &RecommendationRequest) -> Result<RecommendationResponse> {
        if request.min_price > request.max_price {
            return Err(ApiError::InvalidInput(format!(
                "min_price {} exceeds max_price {}",
                request.min_price, request.max_price
            )));
        }

        let customer = self.find_customer(
            &request.customer_id,
            request.locations.as_deref(),
            request.seasons.as_deref(),
        )?;

        let mut rng = match request.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let ranked = rule_based::recommend(
            customer,
            &self.catalog.products,
            request.min_price,
            request.max_price,
            &mut rng,
        )?;
        info!(
            "Rule-based recommender returned {} rows for {}",
            ranked.len(),
            customer.customer_id
        );

        let recommendations = ranked
            .into_iter()
            .map(|product| RecommendedProduct {
                sentiment_insight: SentimentInsight::from_score(product.sentiment_score)
                    .label()
                    .to_string(),
                price_delta_vs_avg_order: product.price - customer.avg_order_value,
                product,
            })
            .collect();

        Ok(RecommendationResponse {
            customer_id: customer.customer_id.clone(),
            recommendations,
        })
    }

    /// Embedding top-N over the cached product vectors. A malformed history
    /// field aborts this one request; nothing partial is returned.
    pub fn similar(&self, request: &SimilarRequest) -> Result<SimilarResponse> {
        let top_n = request.top_n.unwrap_or(self.default_top_n);
        if top_n == 0 {
            return Err(ApiError::InvalidInput(
                "top_n must be at least 1".to_string(),
            ));
        }

        let customer = self.find_customer(
            &request.customer_id,
            request.locations.as_deref(),
            request.seasons.as_deref(),
        )?;
        let interests = customer.interest_labels()?;

        let recommendations = self
            .index
            .top_similar(&self.catalog.products, &interests, top_n);
        info!(
            "Similarity recommender returned {} rows for {}",
            recommendations.len(),
            customer.customer_id
        );

        Ok(SimilarResponse {
            customer_id: customer.customer_id.clone(),
            recommendations,
        })
    }

    /// Serializes the rule-based ranking as comma-separated text for
    /// download. Same inputs and ranking as `recommend`.
    pub fn export_csv(&self, request: &RecommendationRequest) -> Result<String> {
        let response = self.recommend(request)?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in &response.recommendations {
            writer
                .serialize(&row.product)
                .map_err(|e| ApiError::ExportError(e.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| ApiError::ExportError(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ApiError::ExportError(e.to_string()))
    }

    /// Plain key-value profile data. Interest lists fall back to the raw
    /// stored text when they do not parse, so the profile stays viewable.
    pub fn profile(
        &self,
        customer_id: &str,
        locations: Option<&[String]>,
        seasons: Option<&[String]>,
    ) -> Result<ProfileResponse> {
        let customer = self.find_customer(customer_id, locations, seasons)?;
        Ok(ProfileResponse {
            customer_id: customer.customer_id.clone(),
            age: customer.age,
            gender: customer.gender.clone(),
            location: customer.location.clone(),
            interests: customer
                .browsing_labels()
                .unwrap_or_else(|_| vec![customer.browsing_history.clone()]),
            past_purchases: customer
                .purchase_labels()
                .unwrap_or_else(|_| vec![customer.purchase_history.clone()]),
            segment: customer.customer_segment.clone(),
            avg_order_value: customer.avg_order_value,
            holiday_shopper: customer.holiday.clone(),
            season: customer.season.clone(),
        })
    }

    /// Shopping insights over the filtered view, optionally comparing one
    /// customer's spending against it.
    pub fn insights(
        &self,
        locations: Option<&[String]>,
        seasons: Option<&[String]>,
        focus_customer_id: Option<&str>,
    ) -> InsightsResponse {
        let view = self.catalog.filtered_customers(locations, seasons);
        let focus = focus_customer_id.and_then(|id| self.catalog.find_customer(id));
        insights::summarize(&view, focus)
    }
}
