use crate::error::ApiError;
use crate::handlers::split_multi_select;
use crate::models::{RecommendationRequest, SimilarRequest};
use crate::services::RecommendationService;
use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use serde::Deserialize;

pub fn recommendations_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/recommendations").route(web::post().to(recommend)))
        .service(web::resource("/recommendations/similar").route(web::post().to(similar)))
        .service(web::resource("/recommendations/export").route(web::get().to(export)));
}

/// Rule-based top-3 recommendations for one customer within a price window.
pub async fn recommend(
    request: Json<RecommendationRequest>,
    service: web::Data<RecommendationService>,
) -> Result<HttpResponse, ApiError> {
    let response = service.recommend(&request)?;
    Ok(HttpResponse::Ok().json(response))
}

/// Embedding-similarity top-N recommendations for one customer.
pub async fn similar(
    request: Json<SimilarRequest>,
    service: web::Data<RecommendationService>,
) -> Result<HttpResponse, ApiError> {
    let response = service.similar(&request)?;
    Ok(HttpResponse::Ok().json(response))
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub customer_id: String,
    #[serde(default)]
    pub min_price: f64,
    pub max_price: Option<f64>,
    pub locations: Option<String>,
    pub seasons: Option<String>,
    pub seed: Option<u64>,
}

/// The current rule-based ranking as downloadable comma-separated text.
pub async fn export(
    query: web::Query<ExportQuery>,
    service: web::Data<RecommendationService>,
) -> Result<HttpResponse, ApiError> {
    let request = RecommendationRequest {
        customer_id: query.customer_id.clone(),
        min_price: query.min_price,
        max_price: query.max_price.unwrap_or(f64::MAX),
        locations: split_multi_select(query.locations.as_deref()),
        seasons: split_multi_select(query.seasons.as_deref()),
        seed: query.seed,
    };
    let csv_text = service.export_csv(&request)?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .append_header((
            "Content-Disposition",
            "attachment; filename=\"recommendations.csv\"",
        ))
        .body(csv_text))
}
