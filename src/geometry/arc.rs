//! Размещение дуговой секции: концентрические дуги вокруг начала координат.

use std::f64::consts::PI;

use crate::geometry::round6;
use crate::models::{ComputedSection, Seat, SectionConfig, VenueConfig};

/// Ряд `r` лежит на радиусе `stageRadius + (r+1) * rowSpacing` — нулевой
/// ряд отстоит от края сцены на один интервал, ряды не залезают на сцену.
///
/// Внутри ряда место `n` стоит на угле
/// `startAngle + t * (endAngle - startAngle)`, где `t = n / (seatsPerRow-1)`
/// (одиночное место центрируется через `t = 0.5`). Крайние места попадают
/// точно на startAngle/endAngle; распределение равномерно по углу, а не по
/// хорде. Углы не нормализуются: отрицательный размах (endAngle < startAngle)
/// легален, интерполяция остается корректной.
pub(super) fn compute_arc_section(
    section: &SectionConfig,
    start_angle: f64,
    end_angle: f64,
    venue: &VenueConfig,
) -> ComputedSection {
    let mut seats = Vec::with_capacity(section.seat_count());
    let arc_span = end_angle - start_angle;

    for row in 0..section.rows {
        let radius = venue.stage_radius + f64::from(row + 1) * venue.row_spacing;
        let y = round6(section.elevation + f64::from(row) * section.tilt);

        for number in 0..section.seats_per_row {
            let t = if section.seats_per_row > 1 {
                f64::from(number) / f64::from(section.seats_per_row - 1)
            } else {
                0.5
            };
            let angle = start_angle + t * arc_span;

            let x = round6(radius * angle.cos());
            let z = round6(radius * angle.sin());

            // Разворот лицом к центру сцены (0, 0, 0)
            let rot_y = round6(x.atan2(z) + PI);

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
