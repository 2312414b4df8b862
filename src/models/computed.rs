use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Seat, SectionConfig, VenueConfig};

/// Результат расчета одной секции. Места идут в порядке
/// ряд-за-рядом (ряд 0 первым, номера по возрастанию).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedSection {
    pub config: SectionConfig,
    pub seats: Vec<Seat>,
}

/// Результат расчета всей площадки.
///
/// `all_seats` — BTreeMap, а не HashMap: контракт воспроизводимости
/// распространяется на сериализованный вывод, и порядок обхода
/// должен быть одинаков между двумя вычислениями.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedVenue {
    pub config: VenueConfig,
    pub sections: Vec<ComputedSection>,
    pub all_seats: BTreeMap<String, Seat>,
}

impl ComputedVenue {
    pub fn total_seats(&self) -> usize {
        self.sections.iter().map(|s| s.seats.len()).sum()
    }
}
