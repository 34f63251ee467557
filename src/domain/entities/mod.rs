pub mod order;
pub mod payment_status;
pub mod plan;
pub mod record_status;
pub mod testimonial;
