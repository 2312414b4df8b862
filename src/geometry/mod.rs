//! geometry
//!
//! Этот модуль реализует геометрическое ядро: чистое преобразование
//! `VenueConfig` в `ComputedVenue`.
//!
//! Ключевые компоненты:
//! 1.  **compute_venue**: сборщик. Обходит секции в порядке конфигурации,
//!     диспетчеризует каждую по типу (дуговая / прямоугольная) и сливает
//!     результаты в общий индекс мест.
//! 2.  **arc / rect**: два алгоритма размещения. Оба получают секцию и
//!     глобальные параметры площадки и возвращают `rows × seatsPerRow`
//!     мест с позициями и ориентацией на сцену.
//! 3.  **round6**: нормализация чисел. Каждая производная координата
//!     округляется до 6 знаков, чтобы два независимых вычисления одной
//!     конфигурации давали байт-в-байт одинаковый сериализованный вывод.
//!
//! Ядро тотально: ошибок нет, вырожденный ввод (ноль рядов, совпадающие
//! углы) считается как есть. Дубликаты id секций не отлавливаются —
//! места поздней секции молча перезапишут раннюю в `all_seats`;
//! проверка принадлежит границе авторинга (`VenueConfig::validate`).

pub mod arc;
pub mod rect;

use std::collections::BTreeMap;

use crate::models::{ComputedSection, ComputedVenue, SectionConfig, SectionKind, VenueConfig};

/// Округление до 6 знаков, половина — от нуля (семантика f64::round).
/// Применяется только к производным значениям, не ко входу.
pub(crate) fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

fn compute_section(section: &SectionConfig, venue: &VenueConfig) -> ComputedSection {
    match section.kind {
        SectionKind::Arc {
            start_angle,
            end_angle,
        } => arc::compute_arc_section(section, start_angle, end_angle, venue),
        SectionKind::Rectangular { x, z, facing } => {
            rect::compute_rectangular_section(section, x, z, facing, venue)
        }
    }
}

/// Считает всю площадку: секции в порядке конфигурации плюс общий
/// индекс мест по id. Чистая функция, детерминированная для
/// структурно-равного ввода.
pub fn compute_venue(config: &VenueConfig) -> ComputedVenue {
    let sections: Vec<ComputedSection> = config
        .sections
        .iter()
        .map(|section| compute_section(section, config))
        .collect();

    let mut all_seats = BTreeMap::new();
    for section in &sections {
        for seat in &section.seats {
            all_seats.insert(seat.id.clone(), seat.clone());
        }
    }

    ComputedVenue {
        config: config.clone(),
        sections,
        all_seats,
    }
}
