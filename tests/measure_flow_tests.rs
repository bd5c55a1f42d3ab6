//! End-to-End-Szenarien über die öffentliche API mit der Headless-Karte.

use approx::assert_relative_eq;
use messwerk::headless::{HeadlessMarkers, HeadlessSurface, OverlayKind};
use messwerk::{
    haversine_distance, ClickOutcome, LatLng, MeasurementEngine, MeasurementMode,
};

fn setup() -> (MeasurementEngine, HeadlessSurface, HeadlessMarkers) {
    (
        MeasurementEngine::default(),
        HeadlessSurface::new(),
        HeadlessMarkers::new(),
    )
}

#[test]
fn test_equator_degree_distance_within_tolerance() {
    let (mut engine, mut surface, mut markers) = setup();
    engine
        .start(MeasurementMode::Distance, &mut surface, &mut markers)
        .expect("start sollte durchlaufen");

    engine
        .handle_click(LatLng::new(0.0, 0.0), &mut surface, &mut markers)
        .unwrap();
    engine
        .handle_click(LatLng::new(0.0, 1.0), &mut surface, &mut markers)
        .unwrap();

    // 1° Länge am Äquator ≈ 111 195 m
    assert_relative_eq!(
        engine.cumulative_distance(),
        111_195.0,
        max_relative = 0.01
    );
}

#[test]
fn test_degree_square_area_within_tolerance() {
    let (mut engine, mut surface, mut markers) = setup();
    engine
        .start(MeasurementMode::Area, &mut surface, &mut markers)
        .expect("start sollte durchlaufen");

    for &(lat, lng) in &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)] {
        engine
            .handle_click(LatLng::new(lat, lng), &mut surface, &mut markers)
            .unwrap();
    }

    // ~111 km × ~111 km Quadrat ≈ 1.23 × 10^10 m²
    assert!(engine.cumulative_area() > 0.0);
    assert_relative_eq!(engine.cumulative_area(), 1.23e10, max_relative = 0.05);
}

#[test]
fn test_distance_workflow_with_undo_and_finish() {
    let (mut engine, mut surface, mut markers) = setup();
    engine
        .start(MeasurementMode::Distance, &mut surface, &mut markers)
        .unwrap();

    // Drei Klicks, ein Fehlklick wird zurückgenommen
    let route = [
        LatLng::new(52.5200, 13.4050),
        LatLng::new(52.5163, 13.3777),
        LatLng::new(40.7128, -74.0060), // Fehlklick: New York
    ];
    for &point in &route {
        engine.handle_click(point, &mut surface, &mut markers).unwrap();
    }
    engine
        .undo_last_point(&mut surface, &mut markers)
        .expect("Undo sollte durchlaufen");

    let expected = haversine_distance(route[0], route[1]);
    assert_relative_eq!(engine.cumulative_distance(), expected, max_relative = 1e-12);
    assert_eq!(engine.point_count(), 2);

    // Abschließen: Overlay und Anker bleiben sichtbar, Klicks enden
    engine.finish(&mut surface);
    assert_eq!(engine.mode(), MeasurementMode::Inactive);
    assert_eq!(surface.overlay_count(), 1);
    assert_eq!(markers.anchor_count(), 2);
    let outcome = engine
        .handle_click(LatLng::new(0.0, 0.0), &mut surface, &mut markers)
        .unwrap();
    assert_eq!(outcome, ClickOutcome::Ignored);
    assert_eq!(engine.point_count(), 2);
}

#[test]
fn test_restart_same_mode_resets_session() {
    let (mut engine, mut surface, mut markers) = setup();
    engine
        .start(MeasurementMode::Distance, &mut surface, &mut markers)
        .unwrap();
    engine
        .handle_click(LatLng::new(0.0, 0.0), &mut surface, &mut markers)
        .unwrap();
    engine
        .handle_click(LatLng::new(0.0, 1.0), &mut surface, &mut markers)
        .unwrap();

    // start ist bedingungsloses Zurücksetzen-und-Neubeginnen,
    // auch im bereits aktiven Modus
    engine
        .start(MeasurementMode::Distance, &mut surface, &mut markers)
        .expect("erneutes start sollte durchlaufen");
    assert_eq!(engine.point_count(), 0);
    assert_eq!(engine.cumulative_distance(), 0.0);
    assert_eq!(surface.overlay_count(), 0);
    assert_eq!(markers.anchor_count(), 0);
    assert_eq!(surface.subscription_count(), 1);
}

#[test]
fn test_overlay_vertices_follow_click_order() {
    let (mut engine, mut surface, mut markers) = setup();
    engine
        .start(MeasurementMode::Area, &mut surface, &mut markers)
        .unwrap();

    let ring = [
        LatLng::new(48.0, 11.0),
        LatLng::new(48.0, 11.2),
        LatLng::new(48.1, 11.2),
        LatLng::new(48.1, 11.0),
    ];
    for &point in &ring {
        engine.handle_click(point, &mut surface, &mut markers).unwrap();
    }

    let handle = engine.session().overlay().expect("Overlay erwartet");
    let overlay = surface.overlay(handle).expect("Overlay aufgezeichnet");
    assert_eq!(overlay.kind, OverlayKind::Polygon);
    assert_eq!(overlay.vertices.as_slice(), &ring);

    // Jeder Punkt hat genau einen Anker an seiner Koordinate
    assert_eq!(markers.anchor_count(), ring.len());
    for point in engine.points() {
        assert_eq!(markers.anchor_position(point.anchor), Some(point.coordinate));
    }
}

#[test]
fn test_clear_after_arbitrary_sequence_resets_everything() {
    let (mut engine, mut surface, mut markers) = setup();
    engine
        .start(MeasurementMode::Area, &mut surface, &mut markers)
        .unwrap();
    for &(lat, lng) in &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
        engine
            .handle_click(LatLng::new(lat, lng), &mut surface, &mut markers)
            .unwrap();
    }
    engine.undo_last_point(&mut surface, &mut markers).unwrap();
    engine
        .handle_click(LatLng::new(2.0, 2.0), &mut surface, &mut markers)
        .unwrap();

    engine
        .clear(&mut surface, &mut markers)
        .expect("clear sollte durchlaufen");
    assert_eq!(engine.mode(), MeasurementMode::Inactive);
    assert_eq!(engine.point_count(), 0);
    assert_eq!(engine.cumulative_distance(), 0.0);
    assert_eq!(engine.cumulative_area(), 0.0);
    assert_eq!(surface.overlay_count(), 0);
    assert_eq!(surface.subscription_count(), 0);
    assert_eq!(markers.anchor_count(), 0);
}
