//! Статические пресеты площадок. Значения считаются уже проверенными:
//! ядро получает их как готовые `VenueConfig` без валидации.

use std::f64::consts::PI;

use crate::models::{SectionConfig, SectionKind, StageType, VenueConfig};

pub const PRESET_NAMES: [&str; 2] = ["grand-arena", "club-hall"];

pub fn by_name(name: &str) -> Option<VenueConfig> {
    match name {
        "grand-arena" => Some(grand_arena()),
        "club-hall" => Some(club_hall()),
        _ => None,
    }
}

pub fn all() -> Vec<VenueConfig> {
    PRESET_NAMES
        .iter()
        .filter_map(|name| by_name(name))
        .collect()
}

fn arc_section(
    id: &str,
    label: &str,
    color: &str,
    start_angle: f64,
    end_angle: f64,
    rows: u32,
    seats_per_row: u32,
    elevation: f64,
    tilt: f64,
) -> SectionConfig {
    SectionConfig {
        id: id.to_string(),
        label: label.to_string(),
        color: color.to_string(),
        rows,
        seats_per_row,
        elevation,
        tilt,
        kind: SectionKind::Arc {
            start_angle,
            end_angle,
        },
    }
}

/// Круглая арена: четыре нижних дуговых яруса плюс два верхних.
pub fn grand_arena() -> VenueConfig {
    VenueConfig {
        name: "Grand Arena".to_string(),
        stage_type: StageType::Circle,
        stage_radius: 8.0,
        stage_width: 16.0,
        stage_length: 10.0,
        row_spacing: 1.4,
        seat_spacing: 0.8,
        sections: vec![
            arc_section("A", "Section A", "#3b82f6", -PI * 0.4, PI * 0.4, 8, 24, 0.5, 0.35),
            arc_section("B", "Section B", "#10b981", PI * 0.45, PI * 0.95, 8, 16, 0.5, 0.35),
            arc_section("C", "Section C", "#f59e0b", PI * 1.0, PI * 1.6, 8, 24, 0.5, 0.35),
            arc_section("D", "Section D", "#ef4444", PI * 1.65, PI * 1.95, 6, 10, 0.5, 0.35),
            // Верхний ярус
            arc_section("U1", "Upper A", "#8b5cf6", -PI * 0.35, PI * 0.35, 5, 30, 4.0, 0.5),
            arc_section("U2", "Upper C", "#ec4899", PI * 1.05, PI * 1.55, 5, 30, 4.0, 0.5),
        ],
    }
}

/// Клубный зал с прямоугольной сценой: партер из прямоугольных блоков
/// по четырем сторонам плюс дуговой балкон.
pub fn club_hall() -> VenueConfig {
    VenueConfig {
        name: "Club Hall".to_string(),
        stage_type: StageType::Rectangle,
        stage_radius: 7.0,
        stage_width: 12.0,
        stage_length: 8.0,
        row_spacing: 1.2,
        seat_spacing: 0.75,
        sections: vec![
            SectionConfig {
                id: "F1".to_string(),
                label: "Floor North".to_string(),
                color: "#3b82f6".to_string(),
                rows: 10,
                seats_per_row: 14,
                elevation: 0.0,
                tilt: 0.25,
                kind: SectionKind::Rectangular {
                    x: 0.0,
                    z: 5.0,
                    facing: PI * 0.5,
                },
            },
            SectionConfig {
                id: "F2".to_string(),
                label: "Floor South".to_string(),
                color: "#10b981".to_string(),
                rows: 10,
                seats_per_row: 14,
                elevation: 0.0,
                tilt: 0.25,
                kind: SectionKind::Rectangular {
                    x: 0.0,
                    z: -5.0,
                    facing: -PI * 0.5,
                },
            },
            SectionConfig {
                id: "F3".to_string(),
                label: "Floor East".to_string(),
                color: "#f59e0b".to_string(),
                rows: 6,
                seats_per_row: 10,
                elevation: 0.0,
                tilt: 0.25,
                kind: SectionKind::Rectangular {
                    x: 7.0,
                    z: 0.0,
                    facing: 0.0,
                },
            },
            SectionConfig {
                id: "F4".to_string(),
                label: "Floor West".to_string(),
                color: "#ef4444".to_string(),
                rows: 6,
                seats_per_row: 10,
                elevation: 0.0,
                tilt: 0.25,
                kind: SectionKind::Rectangular {
                    x: -7.0,
                    z: 0.0,
                    facing: PI,
                },
            },
            // Балкон
            arc_section("BAL", "Balcony", "#8b5cf6", -PI * 0.3, PI * 0.3, 4, 20, 4.5, 0.5),
        ],
    }
}
