//! Размещение прямоугольной секции: сетка мест на плоскости.

use std::f64::consts::PI;

use crate::geometry::round6;
use crate::models::{ComputedSection, Seat, SectionConfig, VenueConfig};

/// Сетка строится от якоря `(x, z)` — середины внутреннего края секции.
/// `facing` задает направление, в котором уходят ряды; ряд `r` отстоит
/// от якоря на `(r+1) * rowSpacing` (тот же буферный ряд, что и у дуговых
/// секций). Места в ряду центрируются относительно якоря по
/// перпендикулярной оси с шагом `seatSpacing`.
pub(super) fn compute_rectangular_section(
    section: &SectionConfig,
    anchor_x: f64,
    anchor_z: f64,
    facing: f64,
    venue: &VenueConfig,
) -> ComputedSection {
    let mut seats = Vec::with_capacity(section.seat_count());

    // Перпендикуляр — влево-вправо поперек секции
    let perp_x = (facing + PI / 2.0).cos();
    let perp_z = (facing + PI / 2.0).sin();
    // Вперед — от сцены, в глубину рядов
    let fwd_x = facing.cos();
    let fwd_z = facing.sin();

    for row in 0..section.rows {
        let y = round6(section.elevation + f64::from(row) * section.tilt);
        let row_offset = f64::from(row + 1) * venue.row_spacing;

        for number in 0..section.seats_per_row {
            let seat_offset =
                (f64::from(number) - f64::from(section.seats_per_row - 1) / 2.0)
                    * venue.seat_spacing;

            let x = round6(anchor_x + fwd_x * row_offset + perp_x * seat_offset);
            let z = round6(anchor_z + fwd_z * row_offset + perp_z * seat_offset);

            // Лицом против направления facing, то есть к сцене
            let rot_y = round6(facing + PI);

            seats.push(Seat {
                id: format!("{}-{}-{}", section.id, row, number),
                section_id: section.id.clone(),
                row,
                number,
                position: [x, y, z],
                rotation: [0.0, rot_y, 0.0],
            });
        }
    }

    ComputedSection {
        config: section.clone(),
        seats,
    }
}
