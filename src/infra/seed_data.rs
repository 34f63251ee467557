//! Catalog and sample testimonials loaded by the `seed` binary.

use tracing::info;

use crate::{
    app_error::AppResult,
    application::use_cases::{catalog::PlanRepo, testimonial::TestimonialRepo},
    domain::entities::{plan::NewPlan, testimonial::NewTestimonial},
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn plans() -> Vec<NewPlan> {
    vec![
        NewPlan {
            name: "Basic Plan".into(),
            description: "Essential English grammar foundations that will help you speak better English with confidence".into(),
            price_cents: 200,
            currency: "$".into(),
            original_price_cents: None,
            features: strings(&[
                "Core grammar rules for better speaking",
                "Sentence formation techniques for clear communication",
                "Proper use of tenses in daily conversation",
                "Parts of speech with speaking examples",
                "Common grammar mistakes that affect speaking",
                "Simple to complex sentence structures",
                "Speaking-focused grammar exercises",
                "Real-life conversation grammar patterns",
                "Foundation for fluent English speaking",
                "PDF format for easy learning",
                "Lifetime access",
            ]),
            download_files: strings(&["/files/basic-grammar-book.pdf"]),
            is_popular: false,
            is_best_value: false,
        },
        NewPlan {
            name: "Expert Plan".into(),
            description: "Build confidence and speak English fluently with practical examples and real conversation techniques".into(),
            price_cents: 500,
            currency: "$".into(),
            original_price_cents: None,
            features: strings(&[
                "Confidence-building speaking techniques",
                "Daily English conversation starters",
                "100+ practical speaking examples",
                "How to express opinions confidently",
                "Overcoming speaking anxiety methods",
                "Business meeting conversation skills",
                "Social interaction English phrases",
                "Telephone and video call English",
                "Job interview confidence techniques",
                "Public speaking in English basics",
                "Audio pronunciation guide included",
                "Practice dialogues with examples",
                "Speaking fluency improvement tips",
                "Lifetime access",
            ]),
            download_files: strings(&[
                "/files/expert-english-book.pdf",
                "/files/audio-pronunciation-guide.zip",
            ]),
            is_popular: true,
            is_best_value: false,
        },
        NewPlan {
            name: "Legend Plan".into(),
            description: "Master how to speak English properly like a native speaker and become an expert in English communication".into(),
            price_cents: 1500,
            currency: "$".into(),
            original_price_cents: Some(2200),
            features: strings(&[
                "INCLUDES Basic Plan (FREE - $2 value)",
                "INCLUDES Expert Plan (FREE - $5 value)",
                "Native-level English speaking techniques",
                "Advanced pronunciation and accent training",
                "Professional presentation skills in English",
                "Sophisticated vocabulary for expert communication",
                "How to think and speak in English naturally",
                "Advanced conversation flow techniques",
                "Cultural context and natural expressions",
                "Leadership communication in English",
                "Academic and intellectual discussions",
                "Creative storytelling and narrative skills",
                "Advanced grammar for eloquent speaking",
                "International English communication standards",
                "Expert-level writing that enhances speaking",
                "Personal coaching guidance included",
                "Exclusive advanced speaking modules",
                "Priority email support",
                "Lifetime access to all expert content",
            ]),
            download_files: strings(&[
                "/files/basic-grammar-book.pdf",
                "/files/expert-english-book.pdf",
                "/files/audio-pronunciation-guide.zip",
                "/files/legend-advanced-grammar.pdf",
                "/files/native-speaking-techniques.pdf",
                "/files/bonus-materials.zip",
            ]),
            is_popular: false,
            is_best_value: true,
        },
    ]
}

pub fn testimonials() -> Vec<NewTestimonial> {
    [
        (
            "Priya Sharma",
            "Mumbai, India",
            "The Basic Plan helped me understand grammar fundamentals that I struggled with for years. Highly recommended for beginners!",
            "Basic Plan",
        ),
        (
            "Rajesh Kumar",
            "Delhi, India",
            "Expert Plan improved my daily English conversation significantly. The spoken lines and phrases are very practical.",
            "Expert Plan",
        ),
        (
            "Anita Patel",
            "Bangalore, India",
            "Legend Plan is amazing! Getting all three books for just $15 was incredible value. My English has transformed completely.",
            "Legend Plan",
        ),
    ]
    .into_iter()
    .map(|(name, location, text, plan_name)| NewTestimonial {
        name: name.into(),
        location: location.into(),
        rating: 5,
        text: text.into(),
        plan_name: plan_name.into(),
        email: None,
        is_approved: true,
    })
    .collect()
}

/// Upserts the catalog and inserts the sample testimonials into an empty feed.
/// Safe to run repeatedly.
pub async fn seed(plan_repo: &dyn PlanRepo, testimonial_repo: &dyn TestimonialRepo) -> AppResult<()> {
    for plan in plans() {
        let stored = plan_repo.upsert(&plan).await?;
        info!(plan_id = %stored.id, name = %stored.name, "Plan seeded");
    }

    if testimonial_repo.count().await? == 0 {
        for testimonial in testimonials() {
            testimonial_repo.create(&testimonial).await?;
        }
        info!("Sample testimonials seeded");
    } else {
        info!("Testimonials already present, skipping");
    }

    Ok(())
}
