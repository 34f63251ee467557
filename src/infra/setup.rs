use crate::{
    adapters::{files::LocalFileStore, http::app_state::AppState},
    infra::{config::AppConfig, postgres_persistence, rate_limit::RedisRateLimiter},
    use_cases::{
        catalog::{CatalogUseCases, PlanRepo},
        download::DownloadUseCases,
        order::{OrderRepo, OrderUseCases},
        testimonial::{TestimonialRepo, TestimonialUseCases},
    },
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let postgres_arc = Arc::new(postgres_persistence(&config.database_url).await?);

    let rate_limiter = Arc::new(
        RedisRateLimiter::new(
            &config.redis_url,
            config.rate_limit_window_secs,
            config.rate_limit_per_ip,
        )
        .await?,
    );

    let plan_repo = postgres_arc.clone() as Arc<dyn PlanRepo>;
    let order_repo = postgres_arc.clone() as Arc<dyn OrderRepo>;
    let testimonial_repo = postgres_arc.clone() as Arc<dyn TestimonialRepo>;
    let file_store = Arc::new(LocalFileStore::new(config.files_dir.clone()));

    let catalog_use_cases = CatalogUseCases::new(plan_repo.clone());
    let order_use_cases =
        OrderUseCases::new(order_repo.clone(), plan_repo, config.order_policy());
    let download_use_cases = DownloadUseCases::new(order_repo, file_store);
    let testimonial_use_cases = TestimonialUseCases::new(testimonial_repo);

    Ok(AppState {
        config: Arc::new(config),
        catalog_use_cases: Arc::new(catalog_use_cases),
        order_use_cases: Arc::new(order_use_cases),
        download_use_cases: Arc::new(download_use_cases),
        testimonial_use_cases: Arc::new(testimonial_use_cases),
        rate_limiter,
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "grammar_shop=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true)
        .pretty();

    // File (structured JSON logs); skipped when the file cannot be created.
    let json_layer = File::create("app.log").ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
