use std::f64::consts::PI;

use venue_engine::geometry::compute_venue;
use venue_engine::models::{
    SectionConfig, SectionKind, StageType, ValidationError, VenueConfig,
};

fn venue_with(sections: Vec<SectionConfig>) -> VenueConfig {
    VenueConfig {
        name: "Test Venue".to_string(),
        stage_type: StageType::Circle,
        stage_radius: 8.0,
        stage_width: 16.0,
        stage_length: 10.0,
        row_spacing: 1.4,
        seat_spacing: 0.8,
        sections,
    }
}

fn arc_section(id: &str, start_angle: f64, end_angle: f64, rows: u32, seats_per_row: u32) -> SectionConfig {
    SectionConfig {
        id: id.to_string(),
        label: format!("Section {}", id),
        color: "#3b82f6".to_string(),
        rows,
        seats_per_row,
        elevation: 0.5,
        tilt: 0.35,
        kind: SectionKind::Arc {
            start_angle,
            end_angle,
        },
    }
}

fn rect_section(id: &str, x: f64, z: f64, facing: f64, rows: u32, seats_per_row: u32) -> SectionConfig {
    SectionConfig {
        id: id.to_string(),
        label: format!("Section {}", id),
        color: "#10b981".to_string(),
        rows,
        seats_per_row,
        elevation: 0.0,
        tilt: 0.0,
        kind: SectionKind::Rectangular { x, z, facing },
    }
}

#[test]
fn arc_worked_example() {
    // stageRadius=8, rowSpacing=1.4, arc -0.4pi..0.4pi, 2 ряда по 3 места
    let venue = venue_with(vec![arc_section("A", -PI * 0.4, PI * 0.4, 2, 3)]);
    let computed = compute_venue(&venue);

    // Ряд 0 на радиусе 9.4, первый seat точно на startAngle
    let seat = &computed.all_seats["A-0-0"];
    assert_eq!(seat.position, [2.90476, 0.5, -8.939931]);
    assert_eq!(seat.rotation, [0.0, 5.969026, 0.0]);

    // Последнее место ряда точно на endAngle
    let seat = &computed.all_seats["A-0-2"];
    assert_eq!(seat.position, [2.90476, 0.5, 8.939931]);
    assert_eq!(seat.rotation, [0.0, 3.455752, 0.0]);

    // Среднее место ряда 1: t=0.5, угол 0, радиус 10.8, подъем 0.85
    let seat = &computed.all_seats["A-1-1"];
    assert_eq!(seat.position, [10.8, 0.85, 0.0]);
    assert_eq!(seat.rotation, [0.0, 4.712389, 0.0]);
}

#[test]
fn rectangular_worked_example() {
    // facing=pi/2: ряды уходят в +z, места зеркально по x вокруг якоря
    let venue = venue_with(vec![rect_section("R", 0.0, 0.0, PI * 0.5, 1, 2)]);
    let computed = compute_venue(&venue);

    let seat = &computed.all_seats["R-0-0"];
    assert_eq!(seat.position, [0.4, 0.0, 1.4]);
    assert_eq!(seat.rotation, [0.0, 4.712389, 0.0]);

    let seat = &computed.all_seats["R-0-1"];
    assert_eq!(seat.position, [-0.4, 0.0, 1.4]);
    assert_eq!(seat.rotation, [0.0, 4.712389, 0.0]);
}

#[test]
fn compute_is_deterministic() {
    let venue = venue_with(vec![
        arc_section("A", -PI * 0.4, PI * 0.4, 8, 24),
        rect_section("R", 3.0, -2.0, 1.1, 5, 7),
    ]);

    let first = compute_venue(&venue);
    let second = compute_venue(&venue);

    assert_eq!(first, second);
    // Контракт распространяется на сериализованный вывод
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn seat_count_matches_grid() {
    let venue = venue_with(vec![
        arc_section("A", 0.0, PI, 8, 24),
        rect_section("R", 0.0, 0.0, 0.0, 5, 7),
    ]);
    let computed = compute_venue(&venue);

    assert_eq!(computed.sections[0].seats.len(), 8 * 24);
    assert_eq!(computed.sections[1].seats.len(), 5 * 7);
    assert_eq!(computed.all_seats.len(), 8 * 24 + 5 * 7);
    assert_eq!(computed.total_seats(), 8 * 24 + 5 * 7);
}

#[test]
fn seats_are_row_major_and_order_preserved() {
    let venue = venue_with(vec![
        arc_section("B", 0.0, 1.0, 2, 2),
        arc_section("A", 0.0, 1.0, 1, 1),
    ]);
    let computed = compute_venue(&venue);

    // Порядок секций — порядок конфигурации, не алфавитный
    assert_eq!(computed.sections[0].config.id, "B");
    assert_eq!(computed.sections[1].config.id, "A");

    let ids: Vec<&str> = computed.sections[0]
        .seats
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(ids, ["B-0-0", "B-0-1", "B-1-0", "B-1-1"]);
}

#[test]
fn arc_rows_recede_from_stage() {
    let venue = venue_with(vec![arc_section("A", -1.0, 1.0, 6, 4)]);
    let computed = compute_venue(&venue);

    let radius_of = |row: u32| {
        let seat = &computed.all_seats[&format!("A-{}-0", row)];
        (seat.position[0].powi(2) + seat.position[2].powi(2)).sqrt()
    };

    // Ряд 0 за краем сцены, дальше строго по возрастанию
    assert!(radius_of(0) > venue.stage_radius);
    for row in 1..6 {
        assert!(radius_of(row) > radius_of(row - 1));
    }
}

#[test]
fn rectangular_rows_are_centered_on_anchor() {
    let facing = 0.7;
    let venue = venue_with(vec![rect_section("R", 2.0, -1.0, facing, 3, 9)]);
    let computed = compute_venue(&venue);

    for section in &computed.sections {
        for row in 0..3u32 {
            let row_seats: Vec<_> = section
                .seats
                .iter()
                .filter(|s| s.row == row)
                .collect();
            // Перпендикулярные смещения симметричны: центр ряда на оси якоря
            let mean_x: f64 =
                row_seats.iter().map(|s| s.position[0]).sum::<f64>() / row_seats.len() as f64;
            let mean_z: f64 =
                row_seats.iter().map(|s| s.position[2]).sum::<f64>() / row_seats.len() as f64;

            let expected_x = 2.0 + facing.cos() * f64::from(row + 1) * venue.row_spacing;
            let expected_z = -1.0 + facing.sin() * f64::from(row + 1) * venue.row_spacing;
            assert!((mean_x - expected_x).abs() < 1e-5);
            assert!((mean_z - expected_z).abs() < 1e-5);
        }
    }
}

#[test]
fn single_seat_row_is_centered() {
    let venue = venue_with(vec![arc_section("A", 0.0, 1.0, 1, 1)]);
    let computed = compute_venue(&venue);

    // t=0.5: единственное место на середине дуги
    let seat = &computed.all_seats["A-0-0"];
    let angle = seat.position[2].atan2(seat.position[0]);
    assert!((angle - 0.5).abs() < 1e-5);
}

#[test]
fn inverted_span_is_legal() {
    // endAngle < startAngle: размах отрицательный, интерполяция корректна
    let venue = venue_with(vec![arc_section("A", 1.0, -1.0, 1, 3)]);
    let computed = compute_venue(&venue);

    let angle_of = |id: &str| {
        let seat = &computed.all_seats[id];
        seat.position[2].atan2(seat.position[0])
    };
    assert!((angle_of("A-0-0") - 1.0).abs() < 1e-5);
    assert!((angle_of("A-0-1") - 0.0).abs() < 1e-5);
    assert!((angle_of("A-0-2") + 1.0).abs() < 1e-5);
}

#[test]
fn degenerate_sections_compute_as_is() {
    // Ноль рядов — пустая секция, не ошибка
    let venue = venue_with(vec![arc_section("A", 0.0, 1.0, 0, 5)]);
    let computed = compute_venue(&venue);
    assert!(computed.sections[0].seats.is_empty());
    assert!(computed.all_seats.is_empty());

    // Совпадающие углы — все места в одной точке
    let venue = venue_with(vec![arc_section("A", 0.3, 0.3, 1, 4)]);
    let computed = compute_venue(&venue);
    let first = computed.all_seats["A-0-0"].position;
    assert!(computed.sections[0]
        .seats
        .iter()
        .all(|s| s.position == first));
}

#[test]
fn duplicate_section_ids_overwrite_silently() {
    // Сборщик не проверяет уникальность id: поздняя секция выигрывает
    let venue = venue_with(vec![
        arc_section("A", 0.0, 1.0, 2, 2),
        rect_section("A", 5.0, 5.0, 0.0, 2, 2),
    ]);
    let computed = compute_venue(&venue);

    assert_eq!(computed.all_seats.len(), 4);
    // Место из all_seats совпадает с прямоугольной секцией
    assert_eq!(
        computed.all_seats["A-0-0"],
        computed.sections[1].seats[0]
    );
}

#[test]
fn validate_rejects_duplicate_ids() {
    let venue = venue_with(vec![
        arc_section("A", 0.0, 1.0, 2, 2),
        rect_section("A", 5.0, 5.0, 0.0, 2, 2),
    ]);
    assert_eq!(
        venue.validate(),
        Err(ValidationError::DuplicateSectionId("A".to_string()))
    );
}

#[test]
fn validate_rejects_non_positive_dimensions() {
    let mut venue = venue_with(vec![arc_section("A", 0.0, 1.0, 2, 2)]);
    venue.row_spacing = 0.0;
    assert!(matches!(
        venue.validate(),
        Err(ValidationError::NonPositive { field: "rowSpacing", .. })
    ));

    let mut venue = venue_with(vec![arc_section("A", 0.0, 1.0, 0, 2)]);
    venue.sections[0].rows = 0;
    assert!(matches!(
        venue.validate(),
        Err(ValidationError::EmptySection { field: "rows", .. })
    ));
}

#[test]
fn section_config_round_trips_through_json() {
    let venue = venue_with(vec![
        arc_section("A", -PI * 0.4, PI * 0.4, 2, 3),
        rect_section("R", 1.0, 2.0, 0.5, 1, 2),
    ]);

    let json = serde_json::to_value(&venue).unwrap();
    // Вариант сериализуется плоско, с тегом type
    assert_eq!(json["sections"][0]["type"], "arc");
    assert!(json["sections"][0]["startAngle"].is_number());
    assert_eq!(json["sections"][1]["type"], "rectangular");
    assert!(json["sections"][1]["facing"].is_number());

    let back: VenueConfig = serde_json::from_value(json).unwrap();
    assert_eq!(back, venue);
}
