//! Reine Geodäsie-Funktionen auf dem Kugelmodell.
//!
//! Layer-neutral: kann von `engine`, `shared` und Host-Code importiert
//! werden ohne Zirkel-Abhängigkeiten zu erzeugen. Alle Rechnungen nutzen
//! den mittleren Erdradius; ein Ellipsoid-Modell ist bewusst nicht Teil
//! dieses Moduls.

use super::coordinate::LatLng;

/// Mittlerer Erdradius in Metern.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Großkreis-Distanz zweier Koordinaten in Metern (Haversine).
///
/// `a = sin²(Δφ/2) + cos(φ1)·cos(φ2)·sin²(Δλ/2)`,
/// `d = R · 2·atan2(√a, √(1−a))`.
pub fn haversine_distance(a: LatLng, b: LatLng) -> f64 {
    let phi1 = a.lat_rad();
    let phi2 = b.lat_rad();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * central_angle
}

/// Gesamtlänge eines Pfads in Metern: Summe der Haversine-Distanzen
/// aufeinanderfolgender Punktpaare. 0.0 bei weniger als 2 Punkten.
pub fn path_length(points: &[LatLng]) -> f64 {
    points
        .windows(2)
        .map(|pair| haversine_distance(pair[0], pair[1]))
        .sum()
}

/// Fläche eines implizit geschlossenen Rings in Quadratmetern
/// (sphärische Shoelace-Näherung).
///
/// Der Ring wird über Index `i+1 mod n` geschlossen; der erste Punkt
/// muss nicht wiederholt werden. Genau für kleine Flächen, nicht für
/// Polygone über große Teile des Globus oder über die Datumsgrenze.
/// 0.0 bei weniger als 3 Punkten.
pub fn ring_area(points: &[LatLng]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        let xi = points[i].lng_rad();
        let yi = points[i].lat_rad();
        let xj = points[j].lng_rad();
        let yj = points[j].lat_rad();
        sum += xi * yj.sin() - xj * yi.sin();
    }

    sum.abs() * EARTH_RADIUS_M * EARTH_RADIUS_M / 2.0
}
