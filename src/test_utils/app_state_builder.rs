//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates an `AppState`
//! backed entirely by in-memory mocks.

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::{
        catalog::CatalogUseCases,
        download::DownloadUseCases,
        order::OrderUseCases,
        testimonial::TestimonialUseCases,
    },
    domain::entities::{plan::Plan, testimonial::Testimonial},
    infra::{RateLimiterTrait, config::AppConfig},
    test_utils::{
        InMemoryFileStore, InMemoryOrderRepo, InMemoryPlanRepo, InMemoryRateLimiter,
        InMemoryTestimonialRepo,
    },
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let plan = create_test_plan(|p| p.price_cents = 500);
///
/// let app_state = TestAppStateBuilder::new()
///     .with_plan(plan)
///     .with_files(&["/files/basic-grammar-book.pdf"])
///     .build();
/// ```
pub struct TestAppStateBuilder {
    plans: Vec<Plan>,
    testimonials: Vec<Testimonial>,
    files: Vec<String>,
    order_repo: Option<Arc<InMemoryOrderRepo>>,
    rate_limiter: Option<Arc<dyn RateLimiterTrait>>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            plans: vec![],
            testimonials: vec![],
            files: vec![],
            order_repo: None,
            rate_limiter: None,
        }
    }

    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.plans.push(plan);
        self
    }

    pub fn with_testimonial(mut self, testimonial: Testimonial) -> Self {
        self.testimonials.push(testimonial);
        self
    }

    /// Files the download gate can serve.
    pub fn with_files(mut self, paths: &[&str]) -> Self {
        self.files.extend(paths.iter().map(|p| p.to_string()));
        self
    }

    /// Share an order repo with the test so it can inspect or tamper with orders.
    pub fn with_order_repo(mut self, order_repo: Arc<InMemoryOrderRepo>) -> Self {
        self.order_repo = Some(order_repo);
        self
    }

    pub fn with_rate_limiter(mut self, rate_limiter: Arc<dyn RateLimiterTrait>) -> Self {
        self.rate_limiter = Some(rate_limiter);
        self
    }

    pub fn build(self) -> AppState {
        let plan_repo = Arc::new(InMemoryPlanRepo::with_plans(self.plans));
        let order_repo = self
            .order_repo
            .unwrap_or_else(|| Arc::new(InMemoryOrderRepo::new()));
        let testimonial_repo = Arc::new(InMemoryTestimonialRepo::with_testimonials(
            self.testimonials,
        ));
        let file_paths: Vec<&str> = self.files.iter().map(String::as_str).collect();
        let file_store = Arc::new(InMemoryFileStore::with_files(&file_paths));

        // Create minimal config for testing
        let config = Arc::new(AppConfig {
            database_url: SecretString::new("postgres://unused".into()),
            bind_addr: "127.0.0.1:8001".parse::<SocketAddr>().unwrap(),
            cors_origin: None,
            redis_url: String::new(),
            rate_limit_window_secs: 60,
            rate_limit_per_ip: 60,
            trust_proxy: false,
            files_dir: PathBuf::from("./files"),
            request_timeout_secs: 30,
            max_downloads: 5,
            download_ttl_days: 30,
        });

        let rate_limiter: Arc<dyn RateLimiterTrait> = match self.rate_limiter {
            Some(rate_limiter) => rate_limiter,
            None => Arc::new(InMemoryRateLimiter::permissive()),
        };

        AppState {
            catalog_use_cases: Arc::new(CatalogUseCases::new(plan_repo.clone())),
            order_use_cases: Arc::new(OrderUseCases::new(
                order_repo.clone(),
                plan_repo,
                config.order_policy(),
            )),
            download_use_cases: Arc::new(DownloadUseCases::new(order_repo, file_store)),
            testimonial_use_cases: Arc::new(TestimonialUseCases::new(testimonial_repo)),
            rate_limiter,
            config,
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::order::OrderPolicy;

    #[test]
    fn test_builder_policy_matches_defaults() {
        let app_state = TestAppStateBuilder::new().build();
        let policy = app_state.config.order_policy();
        let defaults = OrderPolicy::default();
        assert_eq!(policy.max_downloads, defaults.max_downloads);
        assert_eq!(policy.download_ttl, defaults.download_ttl);
    }
}
