//! Capability-Schnittstellen zum Karten-Host.
//!
//! Die Engine besitzt keine Karte: Klick-Abonnement, Overlay-Primitive
//! und Anker-Marker liefert der Host über diese Traits. Handles sind
//! opake Tokens; ihre Bedeutung kennt nur der Host. Jede von der Engine
//! erzeugte Ressource wird von der Engine selbst wieder freigegeben.

use super::error::ResourceError;
use crate::core::LatLng;

/// Handle eines Vektor-Overlays (Polyline oder Polygon).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayHandle(pub u64);

/// Handle eines Anker-Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorHandle(pub u64);

/// Token eines aktiven Klick-Abonnements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClickSubscription(pub u64);

/// Linienstil für Polylines und Polygon-Umrandungen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Linienfarbe (RGBA)
    pub color: [f32; 4],
    /// Linienstärke in Pixeln
    pub width_px: f32,
}

/// Füllstil für Polygone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillStyle {
    /// Füllfarbe (RGBA, üblicherweise halbtransparent)
    pub fill_color: [f32; 4],
    /// Umrandung
    pub stroke: StrokeStyle,
}

/// Stil der Anker-Marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorStyle {
    /// Radius in Pixeln
    pub radius_px: f32,
    /// Füllfarbe (RGBA)
    pub color: [f32; 4],
    /// Outline-Farbe (RGBA)
    pub outline_color: [f32; 4],
}

/// Karten-Oberfläche: Klick-Quelle und Overlay-Primitive.
pub trait MapSurface {
    /// Registriert ein Klick-Abonnement.
    ///
    /// Der Host leitet Klicks für die Dauer des Abonnements an
    /// `MeasurementEngine::handle_click` weiter.
    fn subscribe_clicks(&mut self) -> Result<ClickSubscription, ResourceError>;

    /// Hebt ein Klick-Abonnement auf. Unbekannte Tokens sind zu ignorieren.
    fn unsubscribe_clicks(&mut self, subscription: ClickSubscription);

    /// Erzeugt eine Polyline über den gegebenen Vertices.
    fn create_polyline(
        &mut self,
        vertices: &[LatLng],
        style: &StrokeStyle,
    ) -> Result<OverlayHandle, ResourceError>;

    /// Ersetzt die Vertex-Liste einer bestehenden Polyline.
    fn update_polyline(
        &mut self,
        handle: OverlayHandle,
        vertices: &[LatLng],
    ) -> Result<(), ResourceError>;

    /// Erzeugt ein Polygon über den gegebenen Vertices.
    /// Der Ring wird vom Host implizit geschlossen.
    fn create_polygon(
        &mut self,
        vertices: &[LatLng],
        style: &FillStyle,
    ) -> Result<OverlayHandle, ResourceError>;

    /// Ersetzt die Vertex-Liste eines bestehenden Polygons.
    fn update_polygon(
        &mut self,
        handle: OverlayHandle,
        vertices: &[LatLng],
    ) -> Result<(), ResourceError>;

    /// Entfernt ein Overlay.
    fn remove_overlay(&mut self, handle: OverlayHandle) -> Result<(), ResourceError>;
}

/// Marker-Fabrik: erzeugt und entfernt Anker-Marker.
pub trait MarkerFactory {
    /// Platziert einen Anker-Marker an der Koordinate.
    fn create_anchor(
        &mut self,
        at: LatLng,
        style: &AnchorStyle,
    ) -> Result<AnchorHandle, ResourceError>;

    /// Entfernt einen Anker-Marker.
    fn remove_anchor(&mut self, handle: AnchorHandle) -> Result<(), ResourceError>;
}
