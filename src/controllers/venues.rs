use axum::{
    body::Body,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

use crate::cache::LayoutCache;
use crate::geometry::compute_venue;
use crate::models::VenueConfig;
use crate::presets;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/presets", get(list_presets))
        .route("/presets/{name}", get(get_preset))
        .route("/presets/{name}/computed", get(get_preset_computed))
        .route("/venue/compute", post(compute_handler))
}

pub async fn list_presets() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "presets": presets::PRESET_NAMES,
    }))
}

pub async fn get_preset(Path(name): Path<String>) -> Response {
    match presets::by_name(&name) {
        Some(config) => Json(json!({
            "success": true,
            "config": config,
        }))
        .into_response(),
        None => preset_not_found(&name),
    }
}

pub async fn get_preset_computed(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    let Some(config) = presets::by_name(&name) else {
        return preset_not_found(&name);
    };
    compute_with_cache(&state, config).await
}

pub async fn compute_handler(
    State(state): State<Arc<AppState>>,
    Json(config): Json<VenueConfig>,
) -> Response {
    // Проверяем конфигурацию на границе: ядро само вырожденный ввод
    // не отклоняет
    if state.config.features.enable_validation {
        if let Err(e) = config.validate() {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "success": false,
                    "error": e.to_string(),
                })),
            )
                .into_response();
        }
    }

    compute_with_cache(&state, config).await
}

// Общий путь: сначала пробуем кеш по отпечатку конфигурации,
// при промахе считаем и кладем результат обратно
async fn compute_with_cache(state: &AppState, config: VenueConfig) -> Response {
    if !state.config.features.enable_cache {
        let computed = compute_venue(&config);
        return Json(serde_json::to_value(&computed).unwrap_or_default()).into_response();
    }

    let fingerprint = LayoutCache::fingerprint(&config);

    if let Some(cached) = state.layouts.get(&fingerprint).await {
        if let Ok(json_str) = serde_json::to_string(cached.as_ref()) {
            return Response::builder()
                .header("Content-Type", "application/json")
                .header("X-Cache", "HIT")
                .body(Body::from(json_str))
                .unwrap();
        }
    }

    let computed = Arc::new(compute_venue(&config));

    if let Ok(json_str) = serde_json::to_string(computed.as_ref()) {
        state.layouts.insert(fingerprint, computed).await;
        return Response::builder()
            .header("Content-Type", "application/json")
            .header("X-Cache", "MISS")
            .body(Body::from(json_str))
            .unwrap();
    }

    // Fallback в случае ошибки сериализации
    tracing::error!("Failed to serialize computed venue `{}`", computed.config.name);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "error": "Failed to serialize computed venue"
        })),
    )
        .into_response()
}

fn preset_not_found(name: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": format!("Unknown preset `{}`", name),
        })),
    )
        .into_response()
}
