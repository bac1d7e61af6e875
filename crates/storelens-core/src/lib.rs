//! Shared types for storelens: the normalized storefront record, the
//! insights report, and application configuration.

pub mod app_config;
pub mod config;
pub mod store;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_COMPETITOR_LISTING_URL};
pub use store::{
    ContactDetails, Faq, ImportantLinks, InsightsReport, Policies, SocialHandles, StoreRecord,
    UNKNOWN_BRAND_NAME,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
