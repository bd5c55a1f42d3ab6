//! Anzeige-Formatierung für Distanzen und Flächen.
//!
//! Reine String-Formatierung ohne UI-Abhängigkeit; die Schwellen folgen
//! der üblichen Kartendarstellung (Meter bis 1 km, Hektar für mittlere
//! Flächen).

/// Quadratmeter pro Hektar.
const M2_PER_HECTARE: f64 = 10_000.0;
/// Quadratmeter pro Quadratkilometer.
const M2_PER_KM2: f64 = 1_000_000.0;

/// Formatiert eine Distanz in Metern als "834 m" bzw. "12.4 km".
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{:.0} m", meters)
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

/// Formatiert eine Fläche in Quadratmetern als "540 m²", "3.2 ha"
/// bzw. "1.5 km²".
pub fn format_area(square_meters: f64) -> String {
    if square_meters < M2_PER_HECTARE {
        format!("{:.0} m²", square_meters)
    } else if square_meters < M2_PER_KM2 {
        format!("{:.1} ha", square_meters / M2_PER_HECTARE)
    } else {
        format!("{:.1} km²", square_meters / M2_PER_KM2)
    }
}

#[cfg(test)]
mod tests;
