use serde::{Deserialize, Serialize};

/// Конфигурация одного блока мест.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    /// Короткий уникальный id, пространство имен для id мест
    pub id: String,
    pub label: String,
    pub color: String,
    pub rows: u32,
    pub seats_per_row: u32,
    /// Высота (Y) нулевого ряда
    pub elevation: f64,
    /// Дополнительный подъем на каждый ряд (трибунный уклон)
    pub tilt: f64,
    #[serde(flatten)]
    pub kind: SectionKind,
}

/// Тип секции и её вариантные поля. Сериализуется с тегом `type`,
/// так что на проводе секция выглядит как плоский объект с полем
/// `"type": "arc" | "rectangular"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SectionKind {
    /// Дуговой ярус вокруг круглой сцены. Углы в радианах, без
    /// нормализации диапазона: endAngle < startAngle допустим.
    #[serde(rename_all = "camelCase")]
    Arc { start_angle: f64, end_angle: f64 },
    /// Прямоугольный блок: якорь (x, z) — середина внутреннего края,
    /// facing — направление, в котором уходят ряды.
    Rectangular { x: f64, z: f64, facing: f64 },
}

impl SectionConfig {
    pub fn seat_count(&self) -> usize {
        self.rows as usize * self.seats_per_row as usize
    }
}
