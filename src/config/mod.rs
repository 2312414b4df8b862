use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub cache: CacheConfig,
    pub features: FeatureFlags,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Настройки кеша вычисленных раскладок
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    pub max_entries: usize,
}

// Feature flags для включения/выключения функциональности
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    pub enable_cache: bool,
    pub enable_validation: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "venue_engine=debug,tower_http=debug".to_string()),
            },
            cache: CacheConfig {
                max_entries: env::var("LAYOUT_CACHE_MAX_ENTRIES")
                    .unwrap_or_else(|_| "256".to_string())
                    .parse()
                    .expect("LAYOUT_CACHE_MAX_ENTRIES must be a valid number"),
            },
            features: FeatureFlags {
                enable_cache: env::var("ENABLE_LAYOUT_CACHE")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .expect("ENABLE_LAYOUT_CACHE must be true or false"),
                enable_validation: env::var("ENABLE_CONFIG_VALIDATION")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .expect("ENABLE_CONFIG_VALIDATION must be true or false"),
            },
        }
    }
}
