use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::plan::{NewPlan, Plan},
};

#[async_trait]
pub trait PlanRepo: Send + Sync {
    async fn get_active_by_id(&self, id: Uuid) -> AppResult<Option<Plan>>;
    /// Active plans ordered by price, cheapest first.
    async fn list_active(&self) -> AppResult<Vec<Plan>>;
    /// Inserts a plan or updates the one with the same name.
    async fn upsert(&self, plan: &NewPlan) -> AppResult<Plan>;
}

#[derive(Clone)]
pub struct CatalogUseCases {
    plan_repo: Arc<dyn PlanRepo>,
}

impl CatalogUseCases {
    pub fn new(plan_repo: Arc<dyn PlanRepo>) -> Self {
        Self { plan_repo }
    }

    #[instrument(skip(self))]
    pub async fn list_plans(&self) -> AppResult<Vec<Plan>> {
        self.plan_repo.list_active().await
    }

    /// Fetches an active plan. Ids that are not UUIDs cannot exist and are
    /// reported as missing.
    #[instrument(skip(self))]
    pub async fn get_plan(&self, plan_id: &str) -> AppResult<Plan> {
        let id = parse_plan_id(plan_id)?;
        self.plan_repo
            .get_active_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Plan"))
    }
}

pub(crate) fn parse_plan_id(plan_id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(plan_id.trim()).map_err(|_| AppError::NotFound("Plan"))
}
