use actix_web::{web, Scope};

use crate::handlers::{
    customer_profile, health_check, list_customers, recommendations_config, shopping_insights,
};

/// Configure all routes for the API
pub fn api_routes() -> Scope {
    web::scope("/api")
        .service(health_check)
        .service(list_customers)
        .service(customer_profile)
        .service(shopping_insights)
        .configure(recommendations_config)
}
