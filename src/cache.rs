use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::geometry::compute_venue;
use crate::models::{ComputedVenue, VenueConfig};
use crate::presets;

/// Мемоизация результатов расчета по отпечатку конфигурации.
///
/// Ядро пересчитывает площадку целиком на каждое изменение; кеш —
/// внешняя оптимизация поверх него. Ключ — SHA-256 канонического JSON
/// конфигурации: структурно-равные конфигурации сериализуются одинаково,
/// значит попадают в одну запись.
#[derive(Clone)]
pub struct LayoutCache {
    entries: Arc<RwLock<HashMap<String, Arc<ComputedVenue>>>>,
    max_entries: usize,
}

impl LayoutCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            max_entries,
        }
    }

    /// Отпечаток конфигурации для ключа кеша.
    pub fn fingerprint(config: &VenueConfig) -> String {
        // Не-финитные числа не сериализуются; такие конфигурации
        // делят пустой ключ и просто не кешируются осмысленно
        let canonical = serde_json::to_string(config).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    // Прогрев кеша при старте: считаем все пресеты заранее
    pub async fn warmup(&self) {
        info!("Starting layout cache warmup...");

        for config in presets::all() {
            let fingerprint = Self::fingerprint(&config);
            let computed = Arc::new(compute_venue(&config));
            info!(
                "Precomputed `{}`: {} seats",
                computed.config.name,
                computed.total_seats()
            );
            self.insert(fingerprint, computed).await;
        }

        info!("Layout cache warmup done");
    }

    pub async fn get(&self, fingerprint: &str) -> Option<Arc<ComputedVenue>> {
        self.entries.read().await.get(fingerprint).cloned()
    }

    pub async fn insert(&self, fingerprint: String, venue: Arc<ComputedVenue>) {
        let mut entries = self.entries.write().await;
        if entries.len() >= self.max_entries {
            // Без вытеснения по LRU: при переполнении начинаем заново
            entries.clear();
            info!("Layout cache cleared after reaching {} entries", self.max_entries);
        }
        entries.insert(fingerprint, venue);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
