use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::models::SectionConfig;

/// Форма сцены. Влияет только на отрисовку, не на расчет мест.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageType {
    Circle,
    Rectangle,
    Basketball,
    Hockey,
}

/// Корневая конфигурация площадки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueConfig {
    pub name: String,
    pub stage_type: StageType,
    /// Базовый радиус для дуговых секций, от центра (0, 0)
    pub stage_radius: f64,
    pub stage_width: f64,
    pub stage_length: f64,
    /// Расстояние между рядами, едино для всех секций
    pub row_spacing: f64,
    /// Расстояние между местами в ряду (только прямоугольные секции)
    pub seat_spacing: f64,
    pub sections: Vec<SectionConfig>,
}

/// Ошибки проверки конфигурации на границе авторинга.
///
/// Геометрическое ядро само ничего не проверяет: вырожденный ввод
/// считается "как есть" (см. compute_venue). Проверка принадлежит
/// слою, который принимает конфигурации извне.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("duplicate section id `{0}`")]
    DuplicateSectionId(String),
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("section `{section}`: {field} must be positive")]
    EmptySection {
        section: String,
        field: &'static str,
    },
}

impl VenueConfig {
    /// Проверяет конфигурацию перед расчетом: положительные размеры
    /// и уникальность id секций. Первая найденная ошибка возвращается.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let dims: [(&'static str, f64); 5] = [
            ("stageRadius", self.stage_radius),
            ("stageWidth", self.stage_width),
            ("stageLength", self.stage_length),
            ("rowSpacing", self.row_spacing),
            ("seatSpacing", self.seat_spacing),
        ];
        for (field, value) in dims {
            if value <= 0.0 {
                return Err(ValidationError::NonPositive { field, value });
            }
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(ValidationError::DuplicateSectionId(section.id.clone()));
            }
            if section.rows == 0 {
                return Err(ValidationError::EmptySection {
                    section: section.id.clone(),
                    field: "rows",
                });
            }
            if section.seats_per_row == 0 {
                return Err(ValidationError::EmptySection {
                    section: section.id.clone(),
                    field: "seatsPerRow",
                });
            }
        }

        Ok(())
    }
}
