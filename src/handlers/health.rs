use crate::services::RecommendationService;
use actix_web::{get, web, HttpResponse};

#[get("/health")]
pub async fn health_check(service: web::Data<RecommendationService>) -> HttpResponse {
    let catalog = service.catalog();
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "customers": catalog.customers.len(),
        "products": catalog.products.len(),
        "from_embedded_sample": catalog.from_embedded_sample,
    }))
}
