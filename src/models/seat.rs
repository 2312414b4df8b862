use serde::{Deserialize, Serialize};

/// Одно место с вычисленной позицией в мировых координатах.
///
/// `rotation` хранит углы Эйлера; используется только Y-компонент (yaw).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    /// Формат: `{sectionId}-{row}-{number}`
    pub id: String,
    pub section_id: String,
    pub row: u32,
    pub number: u32,
    pub position: [f64; 3],
    pub rotation: [f64; 3],
}
