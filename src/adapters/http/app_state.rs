use std::sync::Arc;

use crate::{
    infra::{RateLimiterTrait, config::AppConfig},
    use_cases::{
        catalog::CatalogUseCases, download::DownloadUseCases, order::OrderUseCases,
        testimonial::TestimonialUseCases,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog_use_cases: Arc<CatalogUseCases>,
    pub order_use_cases: Arc<OrderUseCases>,
    pub download_use_cases: Arc<DownloadUseCases>,
    pub testimonial_use_cases: Arc<TestimonialUseCases>,
    pub rate_limiter: Arc<dyn RateLimiterTrait>,
}
