use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SITE_DATA_KEY: &str = "inkSpireSiteData";
pub const DEFAULT_PRODUCTS_KEY: &str = "inkSpireProducts";
pub const DEFAULT_ADMIN_SESSION_KEY: &str = "isAdminLoggedIn";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Site configuration.
///
/// Every field has a built-in default, so an empty JSON object (or no config at
/// all) yields the production settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Local storage key for site content
    #[serde(default = "default_site_data_key")]
    pub site_data_key: String,

    /// Local storage key for the product catalog
    #[serde(default = "default_products_key")]
    pub products_key: String,

    /// Session storage key for the admin flag
    #[serde(default = "default_admin_session_key")]
    pub admin_session_key: String,

    /// Edit-mode credentials. Visible to any client; not a security boundary.
    #[serde(default = "default_admin_username")]
    pub admin_username: String,

    #[serde(default = "default_admin_password")]
    pub admin_password: String,

    /// Number used for `wa.me` deep links
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,

    /// Image used for new products and removed images
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,

    #[serde(default = "default_testimonial_interval_ms")]
    pub testimonial_interval_ms: u64,

    #[serde(default = "default_splash_delay_ms")]
    pub splash_delay_ms: u64,

    /// Queries shorter than this (in chars) return nothing
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    #[serde(default = "default_search_result_limit")]
    pub search_result_limit: usize,
}

fn default_site_data_key() -> String {
    DEFAULT_SITE_DATA_KEY.to_string()
}

fn default_products_key() -> String {
    DEFAULT_PRODUCTS_KEY.to_string()
}

fn default_admin_session_key() -> String {
    DEFAULT_ADMIN_SESSION_KEY.to_string()
}

fn default_admin_username() -> String {
    "inkspire".to_string()
}

fn default_admin_password() -> String {
    "password123".to_string()
}

fn default_whatsapp_number() -> String {
    "+940742200156".to_string()
}

fn default_placeholder_image() -> String {
    "https://images.unsplash.com/photo-1543286386-713bdd548da4?q=80&w=400&h=300&auto=format&fit=crop"
        .to_string()
}

fn default_testimonial_interval_ms() -> u64 {
    7000
}

fn default_splash_delay_ms() -> u64 {
    700
}

fn default_min_query_len() -> usize {
    2
}

fn default_search_result_limit() -> usize {
    20
}

impl SiteConfig {
    /// Parse config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse optional JSON, falling back to defaults when absent or blank
    pub fn from_optional_json(json: Option<&str>) -> Result<Self, ConfigError> {
        match json {
            Some(text) if !text.trim().is_empty() => Self::from_json(text),
            _ => Ok(Self::default()),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_data_key: default_site_data_key(),
            products_key: default_products_key(),
            admin_session_key: default_admin_session_key(),
            admin_username: default_admin_username(),
            admin_password: default_admin_password(),
            whatsapp_number: default_whatsapp_number(),
            placeholder_image: default_placeholder_image(),
            testimonial_interval_ms: default_testimonial_interval_ms(),
            splash_delay_ms: default_splash_delay_ms(),
            min_query_len: default_min_query_len(),
            search_result_limit: default_search_result_limit(),
        }
    }
}
