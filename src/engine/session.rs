//! Session-Zustand einer Messung: Modus, Punktfolge und abgeleitete Summen.

use super::surface::{AnchorHandle, OverlayHandle};
use crate::core::geodesic::{path_length, ring_area};
use crate::core::LatLng;

/// Messmodus. Genau ein Modus ist aktiv; `Inactive` ist Anfangszustand
/// und jederzeit wieder erreichbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasurementMode {
    /// Keine Messung aktiv
    #[default]
    Inactive,
    /// Distanzmessung entlang eines Pfads
    Distance,
    /// Flächenmessung über einen implizit geschlossenen Ring
    Area,
}

impl MeasurementMode {
    /// Mindest-Punktzahl, ab der ein Overlay existiert.
    ///
    /// `Inactive` liefert `usize::MAX`: dort existiert nie ein Overlay.
    pub fn overlay_threshold(&self) -> usize {
        match self {
            MeasurementMode::Distance => 2,
            MeasurementMode::Area => 3,
            MeasurementMode::Inactive => usize::MAX,
        }
    }

    /// `true` für `Distance` und `Area`.
    pub fn is_active(&self) -> bool {
        !matches!(self, MeasurementMode::Inactive)
    }
}

/// Ein erfasster Messpunkt mit seinem Anker-Marker.
///
/// Der Anker gehört exklusiv zum Punkt: erzeugt beim Hinzufügen,
/// zerstört beim Entfernen.
#[derive(Debug)]
pub struct MeasurementPoint {
    /// Koordinate des Punkts
    pub coordinate: LatLng,
    /// Handle des zugehörigen Anker-Markers (1:1)
    pub anchor: AnchorHandle,
}

/// Live-Zustand einer Messung.
///
/// Reiner Zustand ohne Capability-Aufrufe; die Ressourcen-Paarung
/// (Anker und Overlay erzeugen/freigeben) übernimmt die Engine.
/// Die Summen werden bei jeder Mutation vollständig neu berechnet —
/// Punktzahlen bleiben klein, eine inkrementelle Strategie lohnt nicht.
#[derive(Debug, Default)]
pub struct MeasurementSession {
    pub(crate) mode: MeasurementMode,
    pub(crate) points: Vec<MeasurementPoint>,
    /// Pfadlänge über alle Punkte in Metern (roh, ungeachtet des Modus)
    pub(crate) path_length_m: f64,
    /// Ringfläche über alle Punkte in Quadratmetern (roh)
    pub(crate) ring_area_m2: f64,
    pub(crate) overlay: Option<OverlayHandle>,
}

impl MeasurementSession {
    /// Aktueller Messmodus.
    pub fn mode(&self) -> MeasurementMode {
        self.mode
    }

    /// Punktfolge in Einfüge-Reihenfolge (nur lesend).
    pub fn points(&self) -> &[MeasurementPoint] {
        &self.points
    }

    /// Anzahl erfasster Punkte.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Handle des aktuellen Overlays, falls vorhanden.
    pub fn overlay(&self) -> Option<OverlayHandle> {
        self.overlay
    }

    /// Kumulierte Distanz in Metern.
    ///
    /// Nur im Modus `Distance` mit mindestens 2 Punkten aussagekräftig,
    /// sonst 0.0 (die UI zeigt dann "—").
    pub fn cumulative_distance(&self) -> f64 {
        if self.mode == MeasurementMode::Distance && self.points.len() >= 2 {
            self.path_length_m
        } else {
            0.0
        }
    }

    /// Kumulierte Fläche in Quadratmetern.
    ///
    /// Nur im Modus `Area` mit mindestens 3 Punkten aussagekräftig, sonst 0.0.
    pub fn cumulative_area(&self) -> f64 {
        if self.mode == MeasurementMode::Area && self.points.len() >= 3 {
            self.ring_area_m2
        } else {
            0.0
        }
    }

    /// Sammelt die Koordinaten aller Punkte in Einfüge-Reihenfolge.
    pub(crate) fn coordinates(&self) -> Vec<LatLng> {
        self.points.iter().map(|p| p.coordinate).collect()
    }

    /// Berechnet beide Summen vollständig neu aus der Punktfolge.
    pub(crate) fn recompute_totals(&mut self) {
        let coords = self.coordinates();
        self.path_length_m = path_length(&coords);
        self.ring_area_m2 = ring_area(&coords);
    }
}
