use super::*;

#[test]
fn test_format_distance_meters() {
    assert_eq!(format_distance(0.0), "0 m");
    assert_eq!(format_distance(834.4), "834 m");
    assert_eq!(format_distance(999.4), "999 m");
}

#[test]
fn test_format_distance_kilometers() {
    assert_eq!(format_distance(1000.0), "1.0 km");
    assert_eq!(format_distance(12_440.0), "12.4 km");
    assert_eq!(format_distance(111_195.0), "111.2 km");
}

#[test]
fn test_format_area_square_meters() {
    assert_eq!(format_area(0.0), "0 m²");
    assert_eq!(format_area(540.2), "540 m²");
}

#[test]
fn test_format_area_hectares() {
    assert_eq!(format_area(10_000.0), "1.0 ha");
    assert_eq!(format_area(32_500.0), "3.2 ha");
}

#[test]
fn test_format_area_square_kilometers() {
    assert_eq!(format_area(1_000_000.0), "1.0 km²");
    assert_eq!(format_area(1.5e6), "1.5 km²");
    // ~1° × 1° Quadrat am Äquator
    assert_eq!(format_area(1.23e10), "12300.0 km²");
}
