use axum::{routing::get, Json, Router};

use crate::models::site::{company_profile, service_offerings, CompanyProfile, ServiceOffering};
use crate::state::AppState;

pub fn create_site_router() -> Router<AppState> {
    Router::new()
        .route("/company", get(get_company))
        .route("/services", get(get_services))
}

async fn get_company() -> Json<CompanyProfile> {
    Json(company_profile())
}

async fn get_services() -> Json<Vec<ServiceOffering>> {
    Json(service_offerings())
}
