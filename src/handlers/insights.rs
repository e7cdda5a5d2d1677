use crate::handlers::split_multi_select;
use crate::services::RecommendationService;
use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct InsightsQuery {
    pub locations: Option<String>,
    pub seasons: Option<String>,
    /// Optional customer to compare against the filtered view.
    pub customer_id: Option<String>,
}

/// Shopping insight aggregates over the filtered customer view.
#[get("/insights")]
pub async fn shopping_insights(
    query: web::Query<InsightsQuery>,
    service: web::Data<RecommendationService>,
) -> HttpResponse {
    let locations = split_multi_select(query.locations.as_deref());
    let seasons = split_multi_select(query.seasons.as_deref());
    let insights = service.insights(
        locations.as_deref(),
        seasons.as_deref(),
        query.customer_id.as_deref(),
    );
    HttpResponse::Ok().json(insights)
}
