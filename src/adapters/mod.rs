pub mod files;
pub mod http;
pub mod persistence;
