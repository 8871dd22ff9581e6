pub mod config;

pub use config::{Config, LOCAL_API_BASE_URL, PRODUCTION_API_BASE_URL};
