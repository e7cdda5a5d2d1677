use crate::error::ApiError;
use crate::handlers::split_multi_select;
use crate::models::CustomerListResponse;
use crate::services::RecommendationService;
use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    /// Comma-separated location multi-select.
    pub locations: Option<String>,
    /// Comma-separated season multi-select.
    pub seasons: Option<String>,
}

/// Selectable customer ids plus the distinct filter values the sidebar
/// offers.
#[get("/customers")]
pub async fn list_customers(service: web::Data<RecommendationService>) -> HttpResponse {
    let catalog = service.catalog();
    HttpResponse::Ok().json(CustomerListResponse {
        customer_ids: catalog.customer_ids(),
        locations: catalog.distinct_locations(),
        seasons: catalog.distinct_seasons(),
    })
}

/// Key-value profile data for one customer, honoring the view filters.
#[get("/customers/{customer_id}")]
pub async fn customer_profile(
    path: web::Path<String>,
    query: web::Query<FilterQuery>,
    service: web::Data<RecommendationService>,
) -> Result<HttpResponse, ApiError> {
    let customer_id = path.into_inner();
    let locations = split_multi_select(query.locations.as_deref());
    let seasons = split_multi_select(query.seasons.as_deref());
    let profile = service.profile(&customer_id, locations.as_deref(), seasons.as_deref())?;
    Ok(HttpResponse::Ok().json(profile))
}
