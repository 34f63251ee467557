//! In-memory mock implementations for the plan and testimonial repositories.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::{
    app_error::AppResult,
    application::use_cases::{catalog::PlanRepo, testimonial::TestimonialRepo},
    domain::entities::{
        plan::{NewPlan, Plan},
        record_status::RecordStatus,
        testimonial::{NewTestimonial, Testimonial},
    },
};

/// In-memory implementation of PlanRepo for testing.
#[derive(Default)]
pub struct InMemoryPlanRepo {
    pub plans: Mutex<HashMap<Uuid, Plan>>,
}

impl InMemoryPlanRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial plans for testing.
    pub fn with_plans(plans: Vec<Plan>) -> Self {
        let map: HashMap<Uuid, Plan> = plans.into_iter().map(|p| (p.id, p)).collect();
        Self {
            plans: Mutex::new(map),
        }
    }
}

#[async_trait]
impl PlanRepo for InMemoryPlanRepo {
    async fn get_active_by_id(&self, id: Uuid) -> AppResult<Option<Plan>> {
        Ok(self
            .plans
            .lock()
            .unwrap()
            .get(&id)
            .filter(|p| p.is_active())
            .cloned())
    }

    async fn list_active(&self) -> AppResult<Vec<Plan>> {
        let mut plans: Vec<Plan> = self
            .plans
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.is_active())
            .cloned()
            .collect();
        plans.sort_by_key(|p| p.price_cents);
        Ok(plans)
    }

    async fn upsert(&self, plan: &NewPlan) -> AppResult<Plan> {
        let mut plans = self.plans.lock().unwrap();
        let now = chrono::Utc::now().naive_utc();

        let existing = plans.values().find(|p| p.name == plan.name).cloned();
        let stored = Plan {
            id: existing.as_ref().map_or_else(Uuid::new_v4, |p| p.id),
            name: plan.name.clone(),
            description: plan.description.clone(),
            price_cents: plan.price_cents,
            currency: plan.currency.clone(),
            original_price_cents: plan.original_price_cents,
            features: plan.features.clone(),
            download_files: plan.download_files.clone(),
            is_popular: plan.is_popular,
            is_best_value: plan.is_best_value,
            status: RecordStatus::Active,
            created_at: existing.as_ref().map_or(now, |p| p.created_at),
            updated_at: now,
        };

        plans.insert(stored.id, stored.clone());
        Ok(stored)
    }
}

/// In-memory implementation of TestimonialRepo for testing.
#[derive(Default)]
pub struct InMemoryTestimonialRepo {
    pub testimonials: Mutex<Vec<Testimonial>>,
}

impl InMemoryTestimonialRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_testimonials(testimonials: Vec<Testimonial>) -> Self {
        Self {
            testimonials: Mutex::new(testimonials),
        }
    }
}

#[async_trait]
impl TestimonialRepo for InMemoryTestimonialRepo {
    async fn list_published(&self) -> AppResult<Vec<Testimonial>> {
        let mut published: Vec<Testimonial> = self
            .testimonials
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.is_published())
            .cloned()
            .collect();
        published.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        published.truncate(100);
        Ok(published)
    }

    async fn create(&self, testimonial: &NewTestimonial) -> AppResult<Testimonial> {
        let stored = Testimonial {
            id: Uuid::new_v4(),
            name: testimonial.name.clone(),
            location: testimonial.location.clone(),
            rating: testimonial.rating,
            text: testimonial.text.clone(),
            plan_name: testimonial.plan_name.clone(),
            email: testimonial.email.clone(),
            is_approved: testimonial.is_approved,
            status: RecordStatus::Active,
            created_at: chrono::Utc::now().naive_utc(),
        };
        self.testimonials.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.testimonials.lock().unwrap().len() as i64)
    }
}
