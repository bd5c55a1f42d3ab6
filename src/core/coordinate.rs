//! Geografische Koordinate in Grad auf dem Kugelmodell.

use serde::{Deserialize, Serialize};

/// Geografische Koordinate: Breite und Länge in Grad.
///
/// Gültig sind endliche Werte mit Breite in [-90, 90] und Länge in
/// [-180, 180]. `new` prüft nicht (für Literale im gültigen Bereich),
/// `try_new` validiert Eingaben von außen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Geografische Breite in Grad
    pub lat: f64,
    /// Geografische Länge in Grad
    pub lng: f64,
}

impl LatLng {
    /// Erstellt eine Koordinate ohne Bereichsprüfung.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Erstellt eine Koordinate mit Bereichsprüfung.
    ///
    /// `None` bei nicht-endlichen oder außerhalb des Wertebereichs
    /// liegenden Komponenten.
    pub fn try_new(lat: f64, lng: f64) -> Option<Self> {
        let candidate = Self { lat, lng };
        if candidate.is_valid() {
            Some(candidate)
        } else {
            None
        }
    }

    /// Prüft Endlichkeit und Wertebereich beider Komponenten.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Breite in Radiant.
    pub fn lat_rad(&self) -> f64 {
        self.lat.to_radians()
    }

    /// Länge in Radiant.
    pub fn lng_rad(&self) -> f64 {
        self.lng.to_radians()
    }
}
