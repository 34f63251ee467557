pub mod catalog;
pub mod download;
pub mod order;
pub mod testimonial;
