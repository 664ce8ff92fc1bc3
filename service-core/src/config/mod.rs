use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(format!("Invalid store backend: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

/// Per-service values used when the environment leaves a setting unset.
#[derive(Debug, Clone, Copy)]
pub struct GatewayDefaults {
    pub database: &'static str,
    pub collection: &'static str,
}

/// Full configuration of one gateway process.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub common: Config,
    pub mongodb: MongoConfig,
    pub store: StoreBackend,
    pub observability: ObservabilityConfig,
}

impl GatewayConfig {
    pub fn load(defaults: GatewayDefaults) -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common = Config::load()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(GatewayConfig {
            common,
            mongodb: MongoConfig {
                uri: mongo_uri()?,
                database: get_env("MONGO_DATABASE", Some(defaults.database), is_prod)?,
                collection: get_env("MONGO_COLLECTION", Some(defaults.collection), is_prod)?,
            },
            store: get_env("STORE_BACKEND", Some("mongo"), false)?
                .parse()
                .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?,
            observability: ObservabilityConfig {
                log_level: get_env("LOG_LEVEL", Some("info"), false)?,
                otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty()),
            },
        })
    }
}

pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";

/// Connection string from `MONGO_URI`, falling back to the local default in every
/// environment, production included.
pub fn mongo_uri() -> Result<String, AppError> {
    get_env("MONGO_URI", Some(DEFAULT_MONGO_URI), false)
}

/// Reads `key` from the environment.
///
/// In production every key is mandatory; elsewhere `default` is used when set.
pub fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required in production but not set",
                    key
                ))))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required but not set",
                    key
                ))))
            }
        }
    }
}
